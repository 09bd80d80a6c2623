//! Heartbeat logger - periodic timestamped entries appended to a log sink.

mod entry;
mod service;

pub use entry::{LogEntry, MESSAGE_PREFIX};
pub use service::HeartbeatLogger;
