use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TakeoffError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("{tool} failed with exit code {code}: {stderr}")]
    PdftotextFailed {
        tool: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("table detection failed: {0}")]
    TableDetection(String),

    #[error("unknown equipment category '{0}'")]
    UnknownCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
