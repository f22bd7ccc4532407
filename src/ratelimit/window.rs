//! Time window kinds for rate limiting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::FloodgateError;

/// Time window for rate limiting.
///
/// Each kind has a fixed duration that cannot be overridden per call; only
/// the limit within the window is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// Per-second rate limiting
    Second,
    /// Per-day rate limiting
    Day,
    /// Per-week rate limiting
    Week,
}

impl WindowKind {
    /// Get the duration of this time window.
    pub fn duration(&self) -> Duration {
        match self {
            WindowKind::Second => Duration::from_secs(1),
            WindowKind::Day => Duration::from_secs(86_400),
            WindowKind::Week => Duration::from_secs(7 * 86_400),
        }
    }

    /// The lowercase name used in configuration and counter keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowKind::Second => "second",
            WindowKind::Day => "day",
            WindowKind::Week => "week",
        }
    }
}

impl FromStr for WindowKind {
    type Err = FloodgateError;

    /// Parse a window kind name, case-insensitively.
    ///
    /// Unrecognized names are a hard error, never a silent fallback to a
    /// default kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "second" => Ok(WindowKind::Second),
            "day" => Ok(WindowKind::Day),
            "week" => Ok(WindowKind::Week),
            _ => Err(FloodgateError::UnknownPolicyKind(s.to_string())),
        }
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
