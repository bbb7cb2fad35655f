//! Thumbnail Lambda - S3 object-created notifications to 200x200 JPEG thumbnails
//!
//! Environment variables:
//! - AWS_REGION: region for the S3 client (set by the Lambda runtime)
//! - S3_ENDPOINT: optional custom endpoint for S3-compatible storage
//! - S3_FORCE_PATH_STYLE: use path-style addressing (default: false)
//! - THUMB_QUALITY: JPEG quality 1-100 (default: 85)
//! - LOG_FORMAT: `json` (default) or `pretty`
//! - RUST_LOG: tracing filter directives

use lambda_runtime::{run, service_fn, Error};
use thumbnail_service::handler::function_handler;
use thumbnail_service::services::thumbnail::{
    get_s3_client, S3ObjectStore, ThumbnailGenerator, ThumbnailProcessor,
};
use thumbnail_service::{telemetry, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    info!("Starting Thumbnail Lambda");

    // Built once per container and reused by every invocation
    let client = get_s3_client(&config.s3).await;
    let generator = ThumbnailGenerator::new(
        S3ObjectStore::new(client),
        ThumbnailProcessor::new(config.thumbnail()),
    );

    run(service_fn(|event| function_handler(event, &generator))).await
}
