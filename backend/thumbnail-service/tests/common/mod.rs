//! Shared fixtures for thumbnail-service integration tests
//!
//! Provides an in-memory object store that records every read and write,
//! plus helpers for building test images and S3 notification payloads.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::io::Cursor;
use std::sync::Mutex;
use thumbnail_service::services::thumbnail::ObjectStore;
use thumbnail_service::{AppError, Result};

/// A completed `put_object` call
#[derive(Debug, Clone)]
pub struct PutCall {
    pub bucket: String,
    pub key: String,
    pub data: Bytes,
    pub content_type: String,
}

/// In-memory object store.
///
/// Objects registered with `insert_empty` have no body; keys listed via
/// `fail_reads_for` / `fail_writes_for` return a storage error.
#[derive(Default)]
pub struct InMemoryObjectStore {
    objects: Mutex<HashMap<(String, String), Option<Bytes>>>,
    failing_reads: Mutex<HashSet<String>>,
    failing_writes: Mutex<HashSet<String>>,
    reads: Mutex<Vec<(String, String)>>,
    writes: Mutex<Vec<PutCall>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, bucket: &str, key: &str, data: impl Into<Bytes>) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), Some(data.into()));
    }

    pub fn insert_empty(&self, bucket: &str, key: &str) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), None);
    }

    pub fn fail_reads_for(&self, key: &str) {
        self.failing_reads.lock().unwrap().insert(key.to_string());
    }

    pub fn fail_writes_for(&self, key: &str) {
        self.failing_writes.lock().unwrap().insert(key.to_string());
    }

    pub fn reads(&self) -> Vec<(String, String)> {
        self.reads.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<PutCall> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Option<Bytes>> {
        self.reads
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));

        if self.failing_reads.lock().unwrap().contains(key) {
            return Err(AppError::Storage(format!("simulated read failure for {key}")));
        }

        match self
            .objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
        {
            Some(data) => Ok(data.clone()),
            None => Err(AppError::Storage(format!("NoSuchKey: {bucket}/{key}"))),
        }
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        data: Bytes,
        content_type: &str,
    ) -> Result<()> {
        if self.failing_writes.lock().unwrap().contains(key) {
            return Err(AppError::Storage(format!("simulated write failure for {key}")));
        }

        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), Some(data.clone()));
        self.writes.lock().unwrap().push(PutCall {
            bucket: bucket.to_string(),
            key: key.to_string(),
            data,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

/// Encode a solid-colour image as PNG
pub fn png_image(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([180, 90, 30])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
        .expect("encode png");
    buf
}

/// Encode a solid-colour image as JPEG
pub fn jpeg_image(width: u32, height: u32) -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([30, 90, 180])));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Jpeg(90))
        .expect("encode jpeg");
    buf
}

/// A complete S3 `ObjectCreated:Put` notification record
pub fn s3_record(bucket: &str, key: &str) -> Value {
    json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "us-east-1",
        "eventTime": "2024-05-01T12:00:00.000Z",
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "EXAMPLE" },
        "requestParameters": { "sourceIPAddress": "127.0.0.1" },
        "responseElements": {
            "x-amz-request-id": "EXAMPLE123456789",
            "x-amz-id-2": "EXAMPLE123/5678abcdefghijklambdaisawesome/mnopqrstuvwxyzABCDEFGH"
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "thumbnail-trigger",
            "bucket": {
                "name": bucket,
                "ownerIdentity": { "principalId": "A3NL1KOZZKExample" },
                "arn": format!("arn:aws:s3:::{bucket}")
            },
            "object": {
                "key": key,
                "size": 1024,
                "eTag": "d41d8cd98f00b204e9800998ecf8427e",
                "sequencer": "0055AED6DCD90281E5"
            }
        }
    })
}

/// Notification document holding the given records
pub fn s3_event_json(records: Vec<Value>) -> Value {
    json!({ "Records": records })
}
