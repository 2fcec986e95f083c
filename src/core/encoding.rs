//! Record encodings
//!
//! Two encodings are supported:
//! - Json: line-delimited machine-readable records (default)
//! - Console: human-readable format with colorized levels

use super::record::{Record, TIMESTAMP_FORMAT};
use colored::Colorize;

/// Text encoding applied to records before they reach the sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Line-delimited JSON (default)
    ///
    /// Example: `{"time":"2025-01-08T10:30:45.123","level":"info","message":"Request processed"}`
    #[default]
    Json,

    /// Human-readable console format
    ///
    /// Example: `[2025-01-08T10:30:45.123] [INFO ] Request processed`
    Console,
}

impl Encoding {
    /// Resolve a configuration string to an encoding.
    ///
    /// `"console"` selects the human-readable encoder; any other value,
    /// including the empty string, selects line-delimited JSON.
    #[must_use]
    pub fn resolve(s: &str) -> Self {
        match s {
            "console" => Encoding::Console,
            _ => Encoding::Json,
        }
    }

    /// Encode a record as a single line, without a trailing newline
    pub fn encode(&self, record: &Record) -> String {
        match self {
            Encoding::Json => Self::encode_json(record),
            Encoding::Console => Self::encode_console(record),
        }
    }

    fn encode_json(record: &Record) -> String {
        let mut obj = serde_json::Map::new();

        obj.insert(
            "time".to_string(),
            serde_json::Value::String(record.timestamp.format(TIMESTAMP_FORMAT).to_string()),
        );
        obj.insert(
            "level".to_string(),
            serde_json::Value::String(record.level.lower_str().to_string()),
        );
        obj.insert(
            "message".to_string(),
            serde_json::Value::String(record.message.clone()),
        );

        for (key, value) in record.fields.fields() {
            obj.insert(key.clone(), value.to_json_value());
        }

        serde_json::to_string(&serde_json::Value::Object(obj)).unwrap_or_default()
    }

    fn encode_console(record: &Record) -> String {
        let level_str = format!("{:5}", record.level.to_str())
            .color(record.level.color_code())
            .to_string();

        let base = format!(
            "[{}] [{}] {}",
            record.timestamp.format(TIMESTAMP_FORMAT),
            level_str,
            record.message
        );

        if record.fields.is_empty() {
            base
        } else {
            format!("{} {}", base, record.fields.format_fields())
        }
    }
}
