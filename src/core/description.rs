use crate::domain::model::{DescriptionLoad, DescriptionPolicy};
use crate::utils::error::{Result, ScopError};
use regex::Regex;
use std::io::BufRead;
use std::sync::LazyLock;

static DESCRIPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\s(.+)$").expect("description pattern is valid"));

/// 讀取 `scop-des` 說明檔：`<code> <label>`，`#` 開頭為註解
pub fn load_descriptions<R: BufRead>(reader: R, policy: DescriptionPolicy) -> Result<DescriptionLoad> {
    let mut load = DescriptionLoad::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let line_number = index + 1;

        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        match DESCRIPTION_LINE.captures(line) {
            Some(caps) => {
                let code = caps[1].to_string();
                let label = caps[2].to_string();
                if let Some(previous) = load.table.insert(code, label) {
                    tracing::debug!(
                        "Description at line {} replaces earlier label '{}'",
                        line_number,
                        previous
                    );
                }
            }
            None => match policy {
                DescriptionPolicy::Strict => {
                    return Err(ScopError::MalformedDescription {
                        line_number,
                        line: line.to_string(),
                    });
                }
                DescriptionPolicy::Lenient => {
                    tracing::warn!("Skipping malformed description at line {}: {}", line_number, line);
                    load.skipped_lines += 1;
                }
            },
        }
    }

    tracing::debug!(
        "Loaded {} descriptions ({} skipped)",
        load.table.len(),
        load.skipped_lines
    );
    Ok(load)
}
