//! Errors raised at the forms service boundary

use thiserror::Error;

/// Failure of a request to the forms service
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Form not found")]
    NotFound,

    #[error("Forms service returned status {status}")]
    Status { status: u16 },

    #[error("Unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
}
