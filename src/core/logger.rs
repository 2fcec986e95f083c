//! Main logger implementation

use super::{
    encoding::Encoding, error::Result, fields::FieldValue, fields::Fields, log_level::LogLevel,
    record::Record, sink::Sink,
};
use chrono_tz::Tz;

/// A ready-to-use logging handle.
///
/// A `Logger` bundles a minimum severity threshold, a text encoding, a
/// destination sink, a timezone for record timestamps, and a set of static
/// fields attached to every record. All of it is fixed at construction;
/// the `with_*` methods return adjusted copies rather than mutating in
/// place, so independent handles with different configurations can coexist
/// without shared state.
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
    encoding: Encoding,
    sink: Sink,
    timezone: Tz,
    fields: Fields,
}

impl Logger {
    /// Create an all-default handle: Info threshold, line-delimited JSON,
    /// standard output, UTC timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            encoding: Encoding::Json,
            sink: Sink::Stdout,
            timezone: Tz::UTC,
            fields: Fields::new(),
        }
    }

    /// Return a copy with a different minimum severity
    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Return a copy with a different encoding
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Return a copy with a different sink
    #[must_use]
    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    /// Return a copy with a different timestamp timezone
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    /// Return a copy with an additional static field.
    ///
    /// Static fields are attached to every record the copy emits;
    /// per-call fields with the same key take priority.
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.add_field(key, value);
        self
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.emit(level, message.into(), None);
    }

    /// Log with structured per-call fields
    pub fn log_with_fields(&self, level: LogLevel, message: impl Into<String>, fields: Fields) {
        self.emit(level, message.into(), Some(fields));
    }

    fn emit(&self, level: LogLevel, message: String, fields: Option<Fields>) {
        if level < self.min_level {
            return;
        }

        let mut merged = self.fields.clone();
        if let Some(extra) = fields {
            merged.merge(&extra);
        }

        let record = Record::new(level, message, self.timezone).with_fields(merged);
        let line = self.encoding.encode(&record);

        // Emission must never fail the caller; report and continue.
        if let Err(e) = self.sink.write_line(&line) {
            eprintln!("[LOGGER ERROR] Failed to write record: {}", e);
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    pub fn panic(&self, message: impl Into<String>) {
        self.log(LogLevel::Panic, message);
    }

    /// Helper for structured info logging
    pub fn info_with_fields(&self, message: impl Into<String>, fields: Fields) {
        self.log_with_fields(LogLevel::Info, message, fields);
    }

    /// Helper for structured error logging
    pub fn error_with_fields(&self, message: impl Into<String>, fields: Fields) {
        self.log_with_fields(LogLevel::Error, message, fields);
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn sink(&self) -> Sink {
        self.sink
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// The handle's static field set
    pub fn static_fields(&self) -> &Fields {
        &self.fields
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
