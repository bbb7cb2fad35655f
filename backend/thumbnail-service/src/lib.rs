//! Thumbnail Service
//!
//! S3-triggered Lambda that writes a 200x200 JPEG thumbnail next to every
//! uploaded image, skipping any batch that contains its own output.

pub mod config;
pub mod error;
pub mod handler;
pub mod services;
pub mod telemetry;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};
