//! Error types for thumbnail generation.

use thiserror::Error;

/// Errors that can occur when requesting a generated thumbnail.
#[derive(Error, Debug)]
pub enum ThumbnailError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service is offline or unreachable
    #[error("Image service unreachable: {0}")]
    ServiceUnreachable(String),

    /// Service returned an error response
    #[error("Image service error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, usually a human-readable message
        message: String,
    },

    /// Response did not contain a usable image
    #[error("Invalid image response: {0}")]
    InvalidResponse(String),

    /// No API credential was supplied
    #[error("API credential is missing")]
    MissingCredential,

    /// No sound name was supplied for the prompt
    #[error("Sound name is missing")]
    MissingName,
}

impl ThumbnailError {
    /// Whether this failure looks like quota exhaustion.
    ///
    /// The service reports exhausted free-tier quota either as HTTP 429 or
    /// with "quota" in the error body; the distinction matters only for
    /// the message shown to the user.
    pub fn is_quota_exhausted(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                *status == 429 || message.to_lowercase().contains("quota")
            }
            _ => false,
        }
    }
}

impl From<ThumbnailError> for pad_core::PadError {
    fn from(err: ThumbnailError) -> Self {
        pad_core::PadError::thumbnail(err.to_string())
    }
}

/// Result type for thumbnail operations.
pub type Result<T> = std::result::Result<T, ThumbnailError>;
