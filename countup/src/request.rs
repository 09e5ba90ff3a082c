//! Animation parameters for a single count-up display.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DURATION_MS, DEFAULT_SEPARATOR};
use crate::format::format_number;

/// What to count to and how to render it.
///
/// Negative targets and durations are accepted as-is and produce degenerate
/// but well-defined output (downward counts, instant completion).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountUpRequest {
    pub target: f64,
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f64,
    #[serde(default)]
    pub decimals: usize,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    #[serde(default = "default_separator")]
    pub separator: Option<char>,
}

fn default_duration_ms() -> f64 {
    DEFAULT_DURATION_MS
}

#[allow(clippy::unnecessary_wraps)]
fn default_separator() -> Option<char> {
    Some(DEFAULT_SEPARATOR)
}

impl CountUpRequest {
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            duration_ms: DEFAULT_DURATION_MS,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            separator: Some(DEFAULT_SEPARATOR),
        }
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: Option<char>) -> Self {
        self.separator = separator;
        self
    }

    /// Full display string for `value`: `prefix + number + suffix`.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let number = format_number(value, self.decimals, self.separator);
        format!("{}{number}{}", self.prefix, self.suffix)
    }
}
