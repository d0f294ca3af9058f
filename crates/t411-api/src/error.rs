//! Error types for the t411 API client.

use thiserror::Error;

use crate::filter::FilterError;

/// A specialized Result type for t411 API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when interacting with the t411 API.
///
/// Transport failures are not translated: they surface as [`Error::Http`]
/// exactly as reqwest reported them. The client never retries.
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition on the client's own state failed (e.g. empty
    /// credentials at login time). Raised before any network I/O.
    #[error("validation error: {message}")]
    Validation {
        /// Description of the failed precondition.
        message: String,
    },

    /// The service reported an error envelope (`{"error": ..., "code": ...}`).
    ///
    /// Message and code are passed through verbatim, never reworded.
    #[error("API error {code}: {message}")]
    Api {
        /// The service-provided error message.
        message: String,
        /// The service-provided error code (0 when the envelope had none).
        code: i64,
    },

    /// Transport-level failure, propagated unchanged from the HTTP layer.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// A structured response body could not be decoded as JSON.
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// A filter condition could not be evaluated.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl Error {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}
