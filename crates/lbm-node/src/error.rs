//! Error types for lbm-node.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LbmError {
    #[error("expected {expected} population values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("expected {expected} population values, got more")]
    TooManyValues { expected: usize },

    #[error("direction index {index} out of range for {size} populations")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("Invalid stencil: {0}")]
    InvalidStencil(String),

    #[error("Unknown stencil: {0}")]
    UnknownStencil(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LbmError>;
