use crate::core::Storage;
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads input files from the local filesystem, relative to `base_path`.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }
}

impl Storage for LocalStorage {
    fn open(&self, path: &str) -> Result<Box<dyn BufRead + '_>> {
        let full_path = self.base_path.join(path);
        let file = File::open(&full_path).map_err(|e| {
            tracing::debug!("Failed to open {}: {}", full_path.display(), e);
            e
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}
