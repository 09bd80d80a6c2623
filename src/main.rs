use std::time::Duration;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pulselog::{HeartbeatLogger, LogSink};

/// Fixed log destination. Not configurable.
const LOG_PATH: &str = "/logs/app.log";

/// Fixed delay between entries. Not configurable.
const INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize stderr diagnostics; heartbeat entries go to LOG_PATH only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let sink = LogSink::open(LOG_PATH)
        .with_context(|| format!("failed to open log destination {}", LOG_PATH))?;
    let mut logger = HeartbeatLogger::new(sink, INTERVAL);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("received SIGINT, shutting down");
            Ok(())
        }
        res = logger.run() => res.context("heartbeat loop failed"),
    }
}
