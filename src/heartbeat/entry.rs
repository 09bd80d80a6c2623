//! One heartbeat record: a timestamp and a fixed message.

use chrono::{DateTime, Local};

/// Fixed message text preceding the ctime-style timestamp.
pub const MESSAGE_PREFIX: &str = "Logging a new entry at";

/// Level token emitted on every rendered line.
const LEVEL: &str = "INFO";

/// A single heartbeat record. Created fresh each iteration, rendered once,
/// and not retained afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
}

impl LogEntry {
    /// Capture the current local wall-clock time.
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    /// Build an entry for a specific instant.
    pub fn at(timestamp: DateTime<Local>) -> Self {
        Self { timestamp }
    }

    /// The instant this entry was created.
    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Render the full log line, without a trailing newline.
    ///
    /// Format: `<ISO-8601 local time> INFO Logging a new entry at <ctime>`.
    /// The exact template is implementation-defined, not a consumer contract.
    pub fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S"),
            LEVEL,
            MESSAGE_PREFIX,
            self.timestamp.format("%a %b %e %H:%M:%S %Y"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn test_render_matches_template() {
        let ts = Local.with_ymd_and_hms(2026, 8, 27, 9, 5, 3).unwrap();
        let line = LogEntry::at(ts).render();
        assert_eq!(
            line,
            "2026-08-27T09:05:03 INFO Logging a new entry at Thu Aug 27 09:05:03 2026"
        );
    }

    #[test]
    fn test_render_pads_single_digit_day_like_ctime() {
        let ts = Local.with_ymd_and_hms(2026, 8, 3, 23, 59, 0).unwrap();
        let line = LogEntry::at(ts).render();
        assert!(line.ends_with("Mon Aug  3 23:59:00 2026"));
    }

    #[test]
    fn test_render_has_no_newline() {
        assert!(!LogEntry::now().render().contains('\n'));
    }

    #[test]
    fn test_now_is_close_to_wall_clock() {
        let entry = LogEntry::now();
        let leading = entry.render();
        let iso = leading.split(' ').next().unwrap();
        let parsed = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S").unwrap();

        let delta = (Local::now().naive_local() - parsed).num_seconds().abs();
        assert!(delta <= 1, "rendered timestamp drifted by {}s", delta);
    }
}
