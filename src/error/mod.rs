//! Error handling module for ffopts

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for ffopts operations
#[derive(Error, Debug)]
pub enum FfoptsError {
    /// Transcode request failed validation
    #[error("Invalid transcode request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    LoggingInitError { message: String },

    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for ffopts operations
pub type FfoptsResult<T> = std::result::Result<T, FfoptsError>;
