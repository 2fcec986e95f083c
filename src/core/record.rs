//! Log record structure

use super::fields::Fields;
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Timestamp text pattern applied to every encoded record.
///
/// Millisecond precision, no zone suffix; the zone is carried by the
/// record's timestamp value itself.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Tz>,
    pub fields: Fields,
}

impl Record {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Create a record stamped with the current instant in `timezone`.
    ///
    /// Wall-clock "now" is re-read on every call, so two records from the
    /// same logger carry independent timestamps.
    pub fn new(level: LogLevel, message: String, timezone: Tz) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Utc::now().with_timezone(&timezone),
            fields: Fields::new(),
        }
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = fields;
        self
    }
}
