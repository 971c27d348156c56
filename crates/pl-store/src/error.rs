//! Answer store error types.

use thiserror::Error;

/// Errors that can occur while talking to the answer store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("request error: {0}")]
    Request(String),

    #[error("store returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        StoreError::Request(e.to_string())
    }
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
