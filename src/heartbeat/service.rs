//! Heartbeat loop implementation.

use std::time::Duration;

use tracing::{debug, info};

use crate::error::Result;
use crate::heartbeat::LogEntry;
use crate::sink::LogSink;

/// The single component of the daemon: owns the sink and drives the
/// append/sleep loop.
///
/// The loop has no terminal state of its own; it runs until the process is
/// terminated externally or an append fails. A sink failure propagates out
/// of [`run`](Self::run) unrecovered.
#[derive(Debug)]
pub struct HeartbeatLogger {
    sink: LogSink,
    interval: Duration,
    ticks: u64,
}

impl HeartbeatLogger {
    /// Create a new heartbeat logger over an already-open sink.
    pub fn new(sink: LogSink, interval: Duration) -> Self {
        Self {
            sink,
            interval,
            ticks: 0,
        }
    }

    /// Number of entries appended so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Perform one iteration: capture the time, append one entry.
    pub fn tick(&mut self) -> Result<()> {
        let entry = LogEntry::now();
        self.sink.append(&entry)?;
        self.ticks += 1;
        debug!("appended heartbeat entry {}", self.ticks);
        Ok(())
    }

    /// Run the loop forever: one entry immediately, then one per interval.
    ///
    /// Returns only if an append fails; `Ok` is unreachable in practice.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "heartbeat logger started (interval={}s, file={})",
            self.interval.as_secs(),
            self.sink.path().display()
        );

        let mut ticker = tokio::time::interval(self.interval);
        loop {
            // The first tick completes immediately.
            ticker.tick().await;
            self.tick()?;
        }
    }
}
