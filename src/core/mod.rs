//! Core logger types

pub mod encoding;
pub mod error;
pub mod fields;
pub mod log_level;
pub mod logger;
pub mod record;
pub mod sink;

pub use encoding::Encoding;
pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use record::{Record, TIMESTAMP_FORMAT};
pub use sink::Sink;
