//! # kvlog
//!
//! A structured logging facade configured entirely from strings, with a
//! process-wide default logger.
//!
//! ## Features
//!
//! - **String-Driven Setup**: Four settings (level, format, output,
//!   location) resolve to a ready handle; misconfiguration silently
//!   degrades to defaults, so logging setup can never fail startup
//! - **Structured Records**: Line-delimited JSON by default, colorized
//!   console format on request
//! - **Timezone-Aware Timestamps**: Per-handle IANA timezone, re-evaluated
//!   at every record emission
//! - **Process Default**: Lazily constructed exactly once, replaceable at
//!   any time
//!
//! ## Example
//!
//! ```
//! use kvlog::{Logger, Settings};
//!
//! let logger = Logger::from_settings(&Settings::new(
//!     "debug", "console", "stderr", "America/New_York",
//! ));
//! logger.debug("listening on port 8080");
//!
//! kvlog::set_default_logger(std::sync::Arc::new(logger));
//! kvlog::default_logger().info("using the process default");
//! ```

pub mod config;
pub mod core;
pub mod macros;
pub mod registry;

pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::core::{
        Encoding, FieldValue, Fields, LogLevel, Logger, LoggerError, Record, Result, Sink,
        TIMESTAMP_FORMAT,
    };
    pub use crate::registry::{default_logger, set_default_logger};
}

pub use config::{Settings, DEFAULT_LOCATION};
pub use core::{
    Encoding, FieldValue, Fields, LogLevel, Logger, LoggerError, Record, Result, Sink,
    TIMESTAMP_FORMAT,
};
pub use registry::{default_logger, set_default_logger};
