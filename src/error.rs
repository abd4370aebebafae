//! Error types for errpage
//!
//! Library code returns `ErrpageResult`; the binary wraps these with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for errpage operations
pub type ErrpageResult<T> = Result<T, ErrpageError>;

/// Main error type for errpage operations
#[derive(Error, Debug)]
pub enum ErrpageError {
    /// Parent directory of an error page location could not be canonicalized
    #[error("cannot resolve parent directory of '{}': {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON document parsed, but its root is a scalar
    #[error("JSON root must be an object or an array, found {found}")]
    InvalidJsonRoot { found: &'static str },

    /// Invalid configuration file
    #[error("invalid config in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },
}

impl ErrpageError {
    /// True when the error means the lookup as a whole is unavailable,
    /// as opposed to a malformed document or config.
    pub fn is_path_resolution(&self) -> bool {
        matches!(self, ErrpageError::PathResolution { .. })
    }
}
