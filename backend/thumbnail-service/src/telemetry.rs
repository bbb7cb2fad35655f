//! Tracing subscriber setup shared by the Lambda and replay binaries

use crate::config::LogFormat;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` directives take precedence.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::from_default_env()
        .add_directive("thumbnail_service=info".parse().expect("valid directive"));

    match format {
        // CloudWatch stamps every line itself
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .without_time()
            .with_target(false)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
