//! Error types for the thumbnail service.

use thiserror::Error;

/// Result type for thumbnail-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Object store read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Image could not be decoded, resized or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Object key could not be URL-decoded
    #[error("Key decode error: {0}")]
    KeyDecode(String),

    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
