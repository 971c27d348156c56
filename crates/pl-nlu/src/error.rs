//! NLU client error types.

use thiserror::Error;

/// Errors that can occur while talking to the classification service.
#[derive(Debug, Error)]
pub enum NluError {
    #[error("request error: {0}")]
    Request(String),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for NluError {
    fn from(e: reqwest::Error) -> Self {
        NluError::Request(e.to_string())
    }
}

/// Convenience alias for NLU results.
pub type NluResult<T> = Result<T, NluError>;
