use crate::utils::error::{Result, ScopError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(path) => validate_path(field_name, path),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.class_file", "scop-cla-latest.txt").is_ok());
        assert!(validate_path("input.class_file", "").is_err());
        assert!(validate_path("input.class_file", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_optional_path() {
        assert!(validate_optional_path("input.description_file", None).is_ok());
        assert!(validate_optional_path("input.description_file", Some("")).is_err());
    }
}
