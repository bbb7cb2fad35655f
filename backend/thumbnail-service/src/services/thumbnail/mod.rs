//! Thumbnail generation service
//!
//! This module provides thumbnail generation capabilities:
//! - Key helpers for decoding notification keys and naming thumbnails
//! - Change records built from S3 notifications
//! - Image processor for resizing and encoding
//! - Object store seam with an S3 implementation
//! - Generator coordinating the loop guard and per-record processing

pub mod event;
pub mod generator;
pub mod keys;
pub mod processor;
pub mod storage;

pub use event::{ChangeBatch, ChangeRecord};
pub use generator::{BatchReport, ThumbnailGenerator};
pub use keys::{derive_thumbnail_key, is_thumbnail_key, THUMBNAIL_MARKER};
pub use processor::{ThumbnailConfig, ThumbnailProcessor, ThumbnailResult};
pub use storage::{get_s3_client, ObjectStore, S3ObjectStore};
