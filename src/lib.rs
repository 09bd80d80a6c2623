//! Pulselog - heartbeat logger daemon
//!
//! Appends one timestamped line to a fixed log file every five seconds,
//! forever. The library surface exists so the loop can be exercised against
//! a temporary sink in tests; the binary exposes no configuration.

pub mod error;
pub mod heartbeat;
pub mod sink;

pub use error::{HeartbeatError, Result};
pub use heartbeat::{HeartbeatLogger, LogEntry};
pub use sink::LogSink;
