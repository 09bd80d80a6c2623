//! Error types for Pulselog
//!
//! The daemon has exactly one failure class: the log destination becoming
//! unavailable. Uses `thiserror` for automatic `Display` and `Error` trait
//! implementations. All errors are fatal; there is no retry or fallback path.

use thiserror::Error;

/// The primary error type for Pulselog operations.
#[derive(Error, Debug)]
pub enum HeartbeatError {
    /// The log destination cannot be opened (missing parent directory,
    /// permission denied, read-only filesystem, etc.)
    #[error("Log destination unavailable: {0}")]
    Destination(String),

    /// Write or flush failure against an already-open destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Pulselog operations.
pub type Result<T> = std::result::Result<T, HeartbeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HeartbeatError::Destination("permission denied: /logs/app.log".to_string());
        assert_eq!(
            err.to_string(),
            "Log destination unavailable: permission denied: /logs/app.log"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let hb_err: HeartbeatError = io_err.into();
        assert!(matches!(hb_err, HeartbeatError::Io(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
