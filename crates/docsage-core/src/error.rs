//! Error types for DocSage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source not found: {0}")]
    MissingSource(String),

    #[error("Text extraction failed: {0}")]
    Parse(String),

    #[error("Input format error: {0}")]
    InputFormat(String),

    #[error("Output write error: {0}")]
    OutputWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
