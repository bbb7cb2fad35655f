//! Thumbnail generator - turns a notification batch into thumbnail writes
//!
//! Processing happens in two passes:
//! 1. Loop guard: if any record in the batch is already a thumbnail, the
//!    whole batch is dropped. Our own writes trigger new notifications, and
//!    refusing the batch is what stops write -> notify -> write.
//! 2. Each remaining record is fetched, resized and written back next to the
//!    source, strictly in order. Failures are logged and the record skipped.

use super::event::{ChangeBatch, ChangeRecord};
use super::keys::{decode_key_lossy, derive_thumbnail_key, is_thumbnail_key};
use super::processor::ThumbnailProcessor;
use super::storage::ObjectStore;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Content type of every generated thumbnail
pub const THUMBNAIL_CONTENT_TYPE: &str = "image/jpeg";

/// Outcome counters for one batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub records: usize,
    pub generated: usize,
    /// Records whose source had no content body
    pub skipped: usize,
    pub failed: usize,
    /// Set when the loop guard refused the batch
    pub guard_tripped: bool,
}

enum RecordOutcome {
    Generated,
    NoBody,
}

pub struct ThumbnailGenerator<S> {
    store: S,
    processor: Arc<ThumbnailProcessor>,
}

impl<S: ObjectStore> ThumbnailGenerator<S> {
    pub fn new(store: S, processor: ThumbnailProcessor) -> Self {
        Self {
            store,
            processor: Arc::new(processor),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Process one notification batch. Never fails: record errors are
    /// logged and counted in the report.
    pub async fn process(&self, batch: &ChangeBatch) -> BatchReport {
        let mut report = BatchReport {
            records: batch.len(),
            ..BatchReport::default()
        };

        if let Some(key) = find_thumbnail_key(batch) {
            warn!(
                key = %key,
                records = batch.len(),
                "Thumbnail key found in batch, skipping whole batch to avoid a trigger loop"
            );
            report.guard_tripped = true;
            return report;
        }

        for record in batch.records() {
            match self.process_record(record).await {
                Ok(RecordOutcome::Generated) => report.generated += 1,
                Ok(RecordOutcome::NoBody) => report.skipped += 1,
                Err(e) => {
                    error!(
                        bucket = %record.bucket,
                        key = %record.key,
                        error = %e,
                        "Failed to generate thumbnail"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            records = report.records,
            generated = report.generated,
            skipped = report.skipped,
            failed = report.failed,
            "Batch processed"
        );

        report
    }

    async fn process_record(&self, record: &ChangeRecord) -> Result<RecordOutcome> {
        let key = record.decoded_key()?;
        let thumb_key = derive_thumbnail_key(&key);
        info!(
            bucket = %record.bucket,
            key = %key,
            thumb_key = %thumb_key,
            "Generating thumbnail"
        );

        let original = match self.store.get_object(&record.bucket, &key).await? {
            Some(data) => data,
            None => {
                error!(bucket = %record.bucket, key = %key, "Source object has no body, skipping");
                return Ok(RecordOutcome::NoBody);
            }
        };

        let thumbnail = Arc::clone(&self.processor).generate_async(original).await?;

        self.store
            .put_object(
                &record.bucket,
                &thumb_key,
                thumbnail.data.clone(),
                THUMBNAIL_CONTENT_TYPE,
            )
            .await?;

        info!(
            bucket = %record.bucket,
            thumb_key = %thumb_key,
            width = thumbnail.width,
            height = thumbnail.height,
            size = thumbnail.data.len(),
            "Thumbnail created successfully"
        );

        Ok(RecordOutcome::Generated)
    }
}

/// First decoded key in the batch that carries the thumbnail marker.
///
/// Keys that are not valid UTF-8 once decoded are checked lossily; the
/// marker is ASCII so replacement characters cannot hide it.
fn find_thumbnail_key(batch: &ChangeBatch) -> Option<String> {
    batch
        .records()
        .iter()
        .map(|record| {
            record
                .decoded_key()
                .unwrap_or_else(|_| decode_key_lossy(&record.key))
        })
        .find(|key| is_thumbnail_key(key))
}
