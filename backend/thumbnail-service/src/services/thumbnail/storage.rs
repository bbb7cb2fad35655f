//! Object store access for thumbnail generation
//!
//! The generator only needs whole-object reads and writes, so the seam is a
//! two-method trait. `S3ObjectStore` is the production implementation.

use crate::config::S3Config;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use bytes::Bytes;
use tracing::{debug, info};

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read a whole object. `Ok(None)` means the object has no content body.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Bytes>>;

    /// Write a whole object, replacing any existing one.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<()>;
}

/// S3-backed object store
#[derive(Clone, Debug)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Bytes>> {
        let response = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::Storage(format!("Failed to download s3://{bucket}/{key}: {e}"))
            })?;

        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| {
                AppError::Storage(format!("Failed to read body of s3://{bucket}/{key}: {e}"))
            })?
            .into_bytes();

        debug!(bucket = %bucket, key = %key, size = bytes.len(), "Object downloaded");

        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(bytes))
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<()> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(ByteStream::from(data))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("Failed to upload s3://{bucket}/{key}: {e}")))?;

        debug!(bucket = %bucket, key = %key, size, "Object uploaded");
        Ok(())
    }
}

/// Initialize the AWS S3 client
///
/// Credentials always come from the default provider chain (the Lambda
/// execution role in production). Region falls back to `us-east-1` when
/// neither the config nor the environment provides one.
pub async fn get_s3_client(config: &S3Config) -> Client {
    let region_provider = RegionProviderChain::first_try(config.region.clone().map(Region::new))
        .or_default_provider()
        .or_else("us-east-1");

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

    // Custom endpoint for S3-compatible storage like MinIO
    if let Some(endpoint) = &config.endpoint {
        loader = loader.endpoint_url(endpoint);
    }

    let sdk_config = loader.load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.force_path_style)
        .build();

    info!(
        endpoint = ?config.endpoint,
        force_path_style = config.force_path_style,
        "S3 client initialized"
    );

    Client::from_conf(s3_config)
}
