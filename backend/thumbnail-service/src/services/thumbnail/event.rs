//! Change records delivered by S3 object-created notifications

use super::keys;
use crate::error::Result;
use aws_lambda_events::event::s3::S3Event;
use tracing::warn;

/// One object-created notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub bucket: String,
    /// Key as delivered: URL-encoded, `+` for space
    pub key: String,
}

impl ChangeRecord {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    pub fn decoded_key(&self) -> Result<String> {
        keys::decode_key(&self.key)
    }
}

/// Records delivered to a single invocation, in delivery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeBatch {
    records: Vec<ChangeRecord>,
}

impl ChangeBatch {
    pub fn new(records: Vec<ChangeRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<S3Event> for ChangeBatch {
    /// Records without a bucket name or object key are dropped.
    fn from(event: S3Event) -> Self {
        let records = event
            .records
            .into_iter()
            .filter_map(|record| {
                let event_name = record.event_name.unwrap_or_default();
                match (record.s3.bucket.name, record.s3.object.key) {
                    (Some(bucket), Some(key)) => Some(ChangeRecord::new(bucket, key)),
                    (bucket, key) => {
                        warn!(
                            event_name = %event_name,
                            bucket = ?bucket,
                            key = ?key,
                            "Notification record missing bucket or key, skipping"
                        );
                        None
                    }
                }
            })
            .collect();

        Self::new(records)
    }
}
