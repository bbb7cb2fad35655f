//! Thumbnail processor - generates thumbnails from original images
//!
//! Scales the image to cover a fixed 200x200 box, centre-crops the overflow,
//! and encodes the result as JPEG.
//!
//! Uses `spawn_blocking` for CPU-intensive operations to avoid blocking the async runtime.

use crate::error::{AppError, Result};
use bytes::Bytes;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageOutputFormat};
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

/// Thumbnail width in pixels
pub const THUMB_WIDTH: u32 = 200;
/// Thumbnail height in pixels
pub const THUMB_HEIGHT: u32 = 200;

/// Configuration for thumbnail generation
#[derive(Clone, Debug)]
pub struct ThumbnailConfig {
    pub width: u32,
    pub height: u32,
    /// JPEG quality (1-100)
    pub quality: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: THUMB_WIDTH,
            height: THUMB_HEIGHT,
            quality: 85,
        }
    }
}

/// Result of thumbnail generation
#[derive(Debug)]
pub struct ThumbnailResult {
    /// The thumbnail image data as JPEG
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

/// Thumbnail processor
pub struct ThumbnailProcessor {
    config: ThumbnailConfig,
}

impl ThumbnailProcessor {
    /// Create a new processor with the given configuration
    pub fn new(config: ThumbnailConfig) -> Self {
        Self { config }
    }

    /// Create a processor with default configuration
    pub fn with_defaults() -> Self {
        Self::new(ThumbnailConfig::default())
    }

    pub fn config(&self) -> &ThumbnailConfig {
        &self.config
    }

    /// Generate a thumbnail from the given image data (blocking version)
    ///
    /// **Note:** This method performs CPU-intensive operations and should not be called
    /// directly from async code. Use `generate_async` instead.
    pub fn generate(&self, original_data: &[u8]) -> Result<ThumbnailResult> {
        let img = image::load_from_memory(original_data)?;

        let (orig_w, orig_h) = img.dimensions();
        debug!(
            original_width = orig_w,
            original_height = orig_h,
            "Processing image for thumbnail"
        );

        let resized =
            img.resize_to_fill(self.config.width, self.config.height, FilterType::Lanczos3);
        let (width, height) = resized.dimensions();

        let data = self.encode_jpeg(&resized)?;

        debug!(width, height, size = data.len(), "Thumbnail generated");

        Ok(ThumbnailResult {
            data,
            width,
            height,
        })
    }

    /// Generate a thumbnail on the blocking thread pool
    pub async fn generate_async(self: Arc<Self>, original_data: Bytes) -> Result<ThumbnailResult> {
        tokio::task::spawn_blocking(move || self.generate(&original_data))
            .await
            .map_err(|e| AppError::Internal(format!("Thumbnail task panicked: {e}")))?
    }

    /// Encode image as JPEG. Alpha is dropped since JPEG cannot carry it.
    fn encode_jpeg(&self, img: &DynamicImage) -> Result<Bytes> {
        let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

        let mut buf = Vec::new();
        let mut cursor = Cursor::new(&mut buf);
        rgb.write_to(&mut cursor, ImageOutputFormat::Jpeg(self.config.quality))?;

        Ok(Bytes::from(buf))
    }
}
