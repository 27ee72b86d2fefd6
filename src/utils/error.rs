use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScopError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown format at line {line_number}: {line}")]
    UnknownFormat { line_number: usize, line: String },

    #[error("Malformed classification record at line {line_number}: expected at least {expected} fields, found {found}")]
    MalformedRecord {
        line_number: usize,
        expected: usize,
        found: usize,
    },

    #[error("Malformed classification path at line {line_number}: '{fragment}' is not KEY=VALUE")]
    MalformedClassPath { line_number: usize, fragment: String },

    #[error("Malformed description at line {line_number}: {line}")]
    MalformedDescription { line_number: usize, line: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

impl ScopError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScopError::IoError(_) => ErrorCategory::Io,
            ScopError::UnknownFormat { .. }
            | ScopError::MalformedRecord { .. }
            | ScopError::MalformedClassPath { .. }
            | ScopError::MalformedDescription { .. } => ErrorCategory::Input,
            ScopError::ConfigValidationError { .. }
            | ScopError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 依錯誤類別決定程序的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Input => 1,
            ErrorCategory::Configuration => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScopError::IoError(e) => format!("Could not read or write a file: {}", e),
            ScopError::UnknownFormat { line_number, .. } => format!(
                "Classification file line {} is neither a comment nor a record",
                line_number
            ),
            ScopError::MalformedRecord { line_number, .. }
            | ScopError::MalformedClassPath { line_number, .. } => format!(
                "Classification file line {} could not be parsed",
                line_number
            ),
            ScopError::MalformedDescription { line_number, .. } => format!(
                "Description file line {} could not be parsed",
                line_number
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the input files exist and are readable",
            ErrorCategory::Input => match self {
                ScopError::MalformedDescription { .. } => {
                    "Fix the description file or rerun with --lenient-descriptions"
                }
                _ => "Make sure the file is a SCOP classification (scop-cla) table",
            },
            ErrorCategory::Configuration => "Check the command line flags and the TOML configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, ScopError>;
