/// Configuration management for thumbnail-service
///
/// Loads configuration from environment variables with sensible defaults.
/// AWS credentials and region come from the default provider chain.
use crate::error::{AppError, Result};
use crate::services::thumbnail::ThumbnailConfig;

/// Default JPEG quality for generated thumbnails
const DEFAULT_THUMB_QUALITY: u8 = 85;

#[derive(Clone, Debug)]
pub struct Config {
    pub s3: S3Config,
    pub thumb_quality: u8,
    pub log_format: LogFormat,
}

#[derive(Clone, Debug, Default)]
pub struct S3Config {
    /// Overrides the region from the provider chain
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible storage like MinIO
    pub endpoint: Option<String>,
    pub force_path_style: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(AppError::Config(format!("Unknown LOG_FORMAT: {other}"))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let thumb_quality = match lookup("THUMB_QUALITY") {
            Some(raw) => raw
                .trim()
                .parse::<u8>()
                .map_err(|e| AppError::Config(format!("Invalid THUMB_QUALITY {raw:?}: {e}")))?
                .clamp(1, 100),
            None => DEFAULT_THUMB_QUALITY,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => LogFormat::Json,
        };

        Ok(Config {
            s3: S3Config {
                region: lookup("AWS_REGION").filter(|v| !v.is_empty()),
                endpoint: lookup("S3_ENDPOINT").filter(|v| !v.is_empty()),
                force_path_style: lookup("S3_FORCE_PATH_STYLE")
                    .map(|v| matches!(v.trim(), "1" | "true" | "TRUE" | "True"))
                    .unwrap_or(false),
            },
            thumb_quality,
            log_format,
        })
    }

    /// Processor settings derived from this configuration
    pub fn thumbnail(&self) -> ThumbnailConfig {
        ThumbnailConfig {
            quality: self.thumb_quality,
            ..ThumbnailConfig::default()
        }
    }
}
