//! Errors for device and remote interaction.

use memoir_core::MemoirError;
use thiserror::Error;

/// Failures from audio devices and remote generation calls.
///
/// None of these are retried automatically; they are reported once and the
/// user re-triggers the operation.
#[derive(Error, Debug, Clone)]
pub enum InteractionError {
    /// Microphone (or audio file) access denied or unavailable
    #[error("Capture device unavailable: {0}")]
    DeviceUnavailable(String),

    /// The HTTP call itself failed or the service returned an error status
    #[error("API request failed: {message}")]
    Process {
        status_code: Option<u16>,
        message: String,
        is_retryable: bool,
    },

    /// The service answered 2xx but the body was not in the expected shape
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    /// Missing API key or other configuration
    #[error("Missing configuration: {0}")]
    Config(String),

    /// The caller supplied too little material for the operation
    #[error("{0}")]
    InsufficientInput(String),
}

impl From<InteractionError> for MemoirError {
    fn from(err: InteractionError) -> Self {
        match err {
            InteractionError::DeviceUnavailable(message) => MemoirError::device(message),
            InteractionError::Config(message) => MemoirError::config(message),
            other => MemoirError::remote(other.to_string()),
        }
    }
}
