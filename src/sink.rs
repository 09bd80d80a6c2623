//! Append-only log destination.
//!
//! The sink is constructed once at process start and owned by the heartbeat
//! component for the lifetime of the process. Opening is fail-fast: a missing
//! parent directory or unwritable path is reported immediately instead of
//! being repaired, and there is no fallback destination.
//!
//! # Design
//!
//! Each append renders the entry into a single buffer and issues one write
//! followed by a flush, so a line is either fully present in the file or
//! absent. External termination mid-sleep therefore never leaves a partial
//! line behind.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{HeartbeatError, Result};
use crate::heartbeat::LogEntry;

/// Single-writer, append-only file destination for heartbeat entries.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: File,
}

impl LogSink {
    /// Open the destination in append mode, creating the file if absent.
    ///
    /// The parent directory is NOT created; a missing directory is a fatal
    /// startup error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|e| {
                HeartbeatError::Destination(format!("cannot open {}: {}", path.display(), e))
            })?;

        debug!("opened log sink at {}", path.display());
        Ok(Self { path, file })
    }

    /// Append one entry as a complete, flushed line.
    pub fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut line = entry.render();
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }

    /// Path of the destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
