//! String-driven logger configuration
//!
//! The four settings are resolved independently against fixed tables with
//! silent fallbacks, so constructing a logger from configuration can never
//! fail: misconfiguration degrades to defaults instead of halting startup.
//! Callers who want to surface bad values use [`Settings::validate`],
//! which reports problems without changing the no-fail construction path.

use crate::core::{Encoding, LogLevel, Logger, LoggerError, Result, Sink};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Timezone location substituted when `location` is empty
pub const DEFAULT_LOCATION: &str = "UTC";

/// The four string-valued logger settings.
///
/// The default value (all fields empty) resolves to the all-default
/// configuration: Info threshold, line-delimited JSON, standard output,
/// UTC timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Minimum severity: `debug`, `error`, `fatal`, `info`, `panic`,
    /// `warning`; anything else resolves to `info`
    #[serde(default)]
    pub level: String,

    /// Encoding: `console` for human-readable output; anything else
    /// resolves to line-delimited JSON
    #[serde(default)]
    pub format: String,

    /// Destination: `stderr`; anything else resolves to standard output
    #[serde(default)]
    pub output: String,

    /// IANA timezone identifier for record timestamps; empty or
    /// unresolvable values resolve to UTC
    #[serde(default)]
    pub location: String,
}

impl Settings {
    pub fn new(
        level: impl Into<String>,
        format: impl Into<String>,
        output: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            format: format.into(),
            output: output.into(),
            location: location.into(),
        }
    }

    /// Strictly check the settings that have a failure mode.
    ///
    /// Reports a non-empty `level` outside the recognized spellings and a
    /// non-empty `location` that does not name a timezone. `format` and
    /// `output` accept any string by documented fallback, so they are not
    /// checked. This is an optional query; [`Logger::from_settings`]
    /// accepts anything regardless.
    pub fn validate(&self) -> Result<()> {
        if !self.level.is_empty() && self.level.parse::<LogLevel>().is_err() {
            return Err(LoggerError::config(
                "level",
                format!("unrecognized severity '{}'", self.level),
            ));
        }
        if !self.location.is_empty() && self.location.parse::<Tz>().is_err() {
            return Err(LoggerError::config(
                "location",
                format!("unresolvable timezone '{}'", self.location),
            ));
        }
        Ok(())
    }
}

/// Resolve a location string to a timezone.
///
/// Empty input substitutes [`DEFAULT_LOCATION`]. An unresolvable
/// identifier falls back to UTC; the parse error is discarded so that
/// construction cannot fail on a bad location.
fn resolve_timezone(location: &str) -> Tz {
    let location = if location.is_empty() {
        DEFAULT_LOCATION
    } else {
        location
    };
    location.parse().unwrap_or(Tz::UTC)
}

impl Logger {
    /// Construct a logger from string settings.
    ///
    /// Each field is resolved independently; unrecognized values take the
    /// documented fallback, so this never fails.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Logger::new()
            .with_min_level(LogLevel::resolve(&settings.level))
            .with_encoding(Encoding::resolve(&settings.format))
            .with_sink(Sink::resolve(&settings.output))
            .with_timezone(resolve_timezone(&settings.location))
    }
}
