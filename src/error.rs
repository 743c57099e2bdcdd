//! Error types for lexwatch

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corpus {path}: {message}")]
    Corpus { path: PathBuf, message: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl LexError {
    /// Stable machine-readable code used in robot output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
            Self::Corpus { .. } => "corpus",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

pub type Result<T> = std::result::Result<T, LexError>;
