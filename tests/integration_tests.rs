//! Integration tests for the logging facade
//!
//! These tests verify:
//! - String-driven construction with silent fallbacks
//! - Encoding output shape for both formats
//! - Timezone-aware timestamps
//! - Default registry lifecycle and thread safety
//! - Log injection prevention

use chrono::Offset;
use chrono_tz::Tz;
use kvlog::{
    default_logger, set_default_logger, Encoding, Fields, LogLevel, Logger, Record, Settings, Sink,
    TIMESTAMP_FORMAT,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_construction_never_fails() {
    // Every combination of garbage resolves to a usable handle.
    let logger = Logger::from_settings(&Settings::new(
        "LOUD",
        "xml",
        "/dev/null",
        "Not/ARealZone",
    ));

    assert_eq!(logger.min_level(), LogLevel::Info);
    assert_eq!(logger.encoding(), Encoding::Json);
    assert_eq!(logger.sink(), Sink::Stdout);
    assert_eq!(logger.timezone(), Tz::UTC);

    logger.info("constructed from garbage settings");
}

#[test]
fn test_recognized_settings_resolve() {
    let logger = Logger::from_settings(&Settings::new(
        "warning",
        "console",
        "stderr",
        "Asia/Tokyo",
    ));

    assert_eq!(logger.min_level(), LogLevel::Warn);
    assert_eq!(logger.encoding(), Encoding::Console);
    assert_eq!(logger.sink(), Sink::Stderr);
    assert_eq!(logger.timezone(), chrono_tz::Asia::Tokyo);
}

#[test]
fn test_json_output_shape() {
    let logger = Logger::from_settings(&Settings::default()).with_field("service", "api");
    let record = Record::new(LogLevel::Info, "Request processed".to_string(), logger.timezone())
        .with_fields(logger.static_fields().clone().with_field("status", 200));

    let line = logger.encoding().encode(&record);
    let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");

    assert_eq!(parsed["level"], "info");
    assert_eq!(parsed["message"], "Request processed");
    assert_eq!(parsed["service"], "api");
    assert_eq!(parsed["status"], 200);

    // Fixed timestamp pattern: YYYY-MM-DDTHH:MM:SS.mmm
    let time = parsed["time"].as_str().expect("time is a string");
    assert_eq!(time.len(), 23);
    assert_eq!(&time[10..11], "T");
    assert_eq!(&time[19..20], ".");
}

#[test]
fn test_console_output_shape() {
    let logger = Logger::from_settings(&Settings::new("", "console", "", ""));
    let record = Record::new(LogLevel::Warn, "Low disk space".to_string(), logger.timezone());

    let line = logger.encoding().encode(&record);

    assert!(line.contains("WARN"));
    assert!(line.contains("Low disk space"));
    // Leading bracketed timestamp in the fixed pattern
    assert!(line.starts_with('['));
    assert_eq!(&line[11..12], "T");
    assert_eq!(&line[20..21], ".");
}

#[test]
fn test_timestamps_follow_resolved_timezone() {
    let eastern = Logger::from_settings(&Settings::new("", "", "", "America/New_York"));
    let record = Record::new(LogLevel::Info, "tz".to_string(), eastern.timezone());
    let offset = record.timestamp.offset().fix().local_minus_utc();
    assert!(offset == -4 * 3600 || offset == -5 * 3600);

    let fallback = Logger::from_settings(&Settings::new("", "", "", "Not/ARealZone"));
    let record = Record::new(LogLevel::Info, "utc".to_string(), fallback.timezone());
    assert_eq!(record.timestamp.offset().fix().local_minus_utc(), 0);
}

#[test]
fn test_log_injection_prevention() {
    // Newlines in the message must not break the one-record-per-line
    // invariant of the JSON encoding.
    let malicious = "User login\nERROR [2024-10-17] Fake error injected\nINFO Continuation";
    let record = Record::new(LogLevel::Info, malicious.to_string(), Tz::UTC);

    let line = Encoding::Json.encode(&record);
    assert_eq!(line.lines().count(), 1);

    let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid JSON line");
    assert!(parsed["message"].as_str().unwrap().contains("\\n"));
}

#[test]
fn test_independent_handles_coexist() {
    // Timezone and format are per-handle state; constructing one handle
    // must not disturb another.
    let eastern = Logger::from_settings(&Settings::new("", "", "", "America/New_York"));
    let tokyo = Logger::from_settings(&Settings::new("", "console", "", "Asia/Tokyo"));

    assert_eq!(eastern.timezone(), chrono_tz::America::New_York);
    assert_eq!(eastern.encoding(), Encoding::Json);
    assert_eq!(tokyo.timezone(), chrono_tz::Asia::Tokyo);
    assert_eq!(tokyo.encoding(), Encoding::Console);
}

#[test]
fn test_default_registry_lifecycle() {
    // Concurrent first access constructs exactly one handle.
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(default_logger)).collect();
    let loggers: Vec<Arc<Logger>> = handles
        .into_iter()
        .map(|h| h.join().expect("reader thread panicked"))
        .collect();
    for logger in &loggers {
        assert!(Arc::ptr_eq(logger, &loggers[0]));
    }

    // The lazily constructed default carries the all-default configuration.
    let first = default_logger();
    assert_eq!(first.min_level(), LogLevel::Info);
    assert_eq!(first.encoding(), Encoding::Json);
    assert_eq!(first.sink(), Sink::Stdout);
    assert_eq!(first.timezone(), Tz::UTC);

    // Two reads with no intervening set return the same handle.
    assert!(Arc::ptr_eq(&first, &default_logger()));

    // set followed by get returns exactly the handle that was set.
    let replacement = Arc::new(Logger::from_settings(&Settings::new(
        "error", "console", "stderr", "",
    )));
    set_default_logger(Arc::clone(&replacement));
    assert!(Arc::ptr_eq(&default_logger(), &replacement));
    assert_eq!(default_logger().min_level(), LogLevel::Error);

    // The pre-replacement handle stays live and usable.
    first.info("still usable");
}

#[test]
fn test_structured_logging_through_handle() {
    let logger = Logger::from_settings(&Settings::new("debug", "", "", ""))
        .with_field("service", "api-gateway");

    logger.info_with_fields(
        "Request completed",
        Fields::new()
            .with_field("request_id", "abc-123")
            .with_field("latency_ms", 42),
    );
    logger.debug("debug passes the lowered threshold");
    logger.flush().expect("flush");
}

#[test]
fn test_timestamp_format_constant() {
    assert_eq!(TIMESTAMP_FORMAT, "%Y-%m-%dT%H:%M:%S%.3f");
}
