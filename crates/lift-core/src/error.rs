//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `LiftError` or wrap it as one variant, whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `lift-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for LiftError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            LiftError::Io(e.into())
        } else {
            LiftError::Parse(e.to_string())
        }
    }
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
