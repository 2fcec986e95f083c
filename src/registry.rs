//! Process-wide default logger
//!
//! One slot holds the logger used when a caller does not carry an explicit
//! handle. The slot is populated lazily on first read with the all-default
//! configuration and can be replaced at any time. Initialization is
//! exactly-once: concurrent first readers all observe the same handle.

use crate::config::Settings;
use crate::core::Logger;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Logger>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::from_settings(&Settings::default()))))
}

/// Get the process-wide default logger.
///
/// The first call constructs an all-default logger (Info threshold,
/// line-delimited JSON, standard output, UTC) and caches it; later calls
/// return the cached handle until it is replaced with
/// [`set_default_logger`]. Once read, the slot is never empty again for
/// the remainder of the process lifetime; there is no clear operation.
pub fn default_logger() -> Arc<Logger> {
    slot().read().clone()
}

/// Replace the process-wide default logger.
///
/// Overwrites the slot unconditionally and always succeeds. Handles
/// obtained from [`default_logger`] before the replacement stay live and
/// usable; they are simply no longer the one new readers retrieve.
pub fn set_default_logger(logger: Arc<Logger>) {
    *slot().write() = logger;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, Sink};
    use std::thread;

    // The registry is process-global state, so the lifecycle is exercised
    // in a single test to keep the assertions order-independent.
    #[test]
    fn test_default_registry_lifecycle() {
        // Concurrent first access: every thread must observe the same
        // handle, constructed exactly once.
        let handles: Vec<_> = (0..16)
            .map(|_| thread::spawn(default_logger))
            .collect();
        let loggers: Vec<Arc<Logger>> = handles
            .into_iter()
            .map(|h| h.join().expect("reader thread panicked"))
            .collect();
        for logger in &loggers {
            assert!(Arc::ptr_eq(logger, &loggers[0]));
            assert_eq!(logger.min_level(), LogLevel::Info);
            assert_eq!(logger.sink(), Sink::Stdout);
        }

        // Repeated reads return the cached handle.
        assert!(Arc::ptr_eq(&default_logger(), &default_logger()));

        // An explicit set replaces the slot with exactly that handle.
        let replacement = Arc::new(
            Logger::from_settings(&Settings::new("debug", "console", "stderr", "")),
        );
        set_default_logger(Arc::clone(&replacement));
        let retrieved = default_logger();
        assert!(Arc::ptr_eq(&retrieved, &replacement));
        assert_eq!(retrieved.min_level(), LogLevel::Debug);
        assert_eq!(retrieved.sink(), Sink::Stderr);

        // Earlier handles remain usable after replacement.
        loggers[0].info("still usable after replacement");
    }
}
