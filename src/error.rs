use std::io;
use thiserror::Error;

/// Custom error types for the sunrise-sunset client
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when the timezone name does not resolve to an IANA zone
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Error when an environment variable holds an unparsable value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Wrapper for reqwest errors
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for I/O errors
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// Wrapper for JSON deserialization errors
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
