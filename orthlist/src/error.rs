//! Errors raised while running a matrix job

use std::io;
use std::path::PathBuf;

use orthlist_core::{MatrixError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to echo operands")]
    Echo(#[source] io::Error),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[cfg(feature = "serde")]
    #[error("failed to encode result as JSON")]
    Json(#[from] serde_json::Error),

    #[error("invalid value range {min}..={max}")]
    InvalidRange { min: i32, max: i32 },
}

impl From<ParseError> for RunError {
    fn from(err: ParseError) -> Self {
        RunError::Matrix(err.into())
    }
}

pub type Result<T> = std::result::Result<T, RunError>;
