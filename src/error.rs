//! Error types for crmdash.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("full-screen request refused: {0}")]
    Fullscreen(String),

    #[error("invalid snapshot size {0:?} (expected COLSxROWS, e.g. 160x48)")]
    InvalidSnapshotSize(String),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::ConfigInvalid(message.into())
    }
}
