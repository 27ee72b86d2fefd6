use crate::domain::model::{ClassPath, ClassificationRecord, ReleaseInfo, RECORD_FIELD_COUNT};
use crate::utils::error::{Result, ScopError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static RELEASE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SCOP release (.+)").expect("release pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Comment(String),
    Record(ClassificationRecord),
    Blank,
}

/// 解析 `scop-cla` 的一行
///
/// - `#` 開頭：註解（保留作為 metadata）
/// - 數字開頭：資料列，最後一欄是 `KEY=VALUE,...` 分類路徑
/// - 其他：未知格式，整個轉換中止
pub fn parse_line(line: &str, line_number: usize) -> Result<ParsedLine> {
    let line = line.trim_end_matches(['\r', '\n']);

    if line.starts_with('#') {
        return Ok(ParsedLine::Comment(line.to_string()));
    }

    if line.trim().is_empty() {
        return Ok(ParsedLine::Blank);
    }

    if !line.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ScopError::UnknownFormat {
            line_number,
            line: line.to_string(),
        });
    }

    let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if fields.len() < RECORD_FIELD_COUNT {
        return Err(ScopError::MalformedRecord {
            line_number,
            expected: RECORD_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let class_path = parse_class_path(&fields[fields.len() - 1], line_number)?;

    Ok(ParsedLine::Record(ClassificationRecord { fields, class_path }))
}

pub fn parse_class_path(raw: &str, line_number: usize) -> Result<ClassPath> {
    let mut path = ClassPath::new();
    // 空片段（結尾逗號、連續逗號）不帶任何 key，直接略過
    for fragment in raw.split(',').filter(|f| !f.is_empty()) {
        let (key, value) = fragment
            .split_once('=')
            .ok_or_else(|| ScopError::MalformedClassPath {
                line_number,
                fragment: fragment.to_string(),
            })?;
        if key.is_empty() {
            return Err(ScopError::MalformedClassPath {
                line_number,
                fragment: fragment.to_string(),
            });
        }
        path.insert(key.to_string(), value.to_string());
    }
    Ok(path)
}

/// 從註解行擷取 `SCOP release <value>`
pub fn release_from_comment(comment: &str) -> Option<ReleaseInfo> {
    let caps = RELEASE_HEADER.captures(comment)?;
    let value = caps[1].trim_end().to_string();
    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
    if date.is_none() {
        tracing::warn!("SCOP release '{}' is not a YYYY-MM-DD date", value);
    }
    Some(ReleaseInfo { value, date })
}
