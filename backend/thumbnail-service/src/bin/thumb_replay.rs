use std::io::Read;
use thumbnail_service::services::thumbnail::{
    get_s3_client, ChangeBatch, S3ObjectStore, ThumbnailGenerator, ThumbnailProcessor,
};
use thumbnail_service::{telemetry, Config};
use tracing::info;

/// Replay a saved S3 notification through the thumbnail generator.
///
/// Usage: `thumb-replay [EVENT_JSON_PATH]` (reads stdin when the path is
/// missing or `-`). Applies the same loop guard as the Lambda, so replaying
/// an event that contains thumbnail keys writes nothing.
///
/// Env vars reused from the Lambda:
/// AWS_REGION, S3_ENDPOINT, S3_FORCE_PATH_STYLE, THUMB_QUALITY, LOG_FORMAT.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_format);

    let raw = match std::env::args().nth(1).as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)?,
    };

    let event: aws_lambda_events::event::s3::S3Event = serde_json::from_str(&raw)?;
    let batch = ChangeBatch::from(event);
    info!(records = batch.len(), "Replaying notification batch");

    let client = get_s3_client(&config.s3).await;
    let generator = ThumbnailGenerator::new(
        S3ObjectStore::new(client),
        ThumbnailProcessor::new(config.thumbnail()),
    );

    let report = generator.process(&batch).await;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
