use thiserror::Error;

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    #[error("Normalization error for '{input}': {message}")]
    Normalization { input: String, message: String },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
