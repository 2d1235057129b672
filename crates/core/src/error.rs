//! Error types for the trestle conversion library.

use thiserror::Error;

/// Primary error type for layout-to-Markdown conversion.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("page {pageno}: {msg}")]
    PageExtraction { pageno: usize, msg: String },

    #[error("malformed layout dump: {0}")]
    MalformedDump(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience Result type alias for ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
