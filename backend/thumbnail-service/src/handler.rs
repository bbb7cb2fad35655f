//! Lambda entry point for S3 object-created notifications

use crate::services::thumbnail::{ChangeBatch, ObjectStore, ThumbnailGenerator};
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::info;

/// Handle one notification batch.
///
/// Always reports success to the runtime: per-record failures are only
/// visible in the logs, so a bad image never causes the batch to be
/// redelivered.
pub async fn function_handler<S: ObjectStore>(
    event: LambdaEvent<S3Event>,
    generator: &ThumbnailGenerator<S>,
) -> Result<(), Error> {
    let (payload, context) = event.into_parts();
    let batch = ChangeBatch::from(payload);

    info!(
        request_id = %context.request_id,
        records = batch.len(),
        "Received storage notification batch"
    );

    let report = generator.process(&batch).await;

    info!(
        request_id = %context.request_id,
        generated = report.generated,
        skipped = report.skipped,
        failed = report.failed,
        guard_tripped = report.guard_tripped,
        "Invocation complete"
    );

    Ok(())
}
