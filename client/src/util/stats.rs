//! Headline statistics on the landing page and how each one renders.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use countup::consts::DEFAULT_SEPARATOR;
use countup::request::CountUpRequest;

/// Count-up duration for every stat card.
pub const STAT_DURATION_MS: f64 = 2000.0;

/// Shown in place of a number for [`StatFormat::Time`].
pub const ALWAYS_ON_LABEL: &str = "24/7";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatFormat {
    Number,
    Percentage,
    /// Out of five, e.g. `4.9/5`.
    Rating,
    /// Availability; rendered as a fixed label rather than a count.
    Time,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub end: f64,
    pub label: &'static str,
    pub emoji: &'static str,
    pub suffix: &'static str,
    pub decimals: usize,
    pub format: StatFormat,
}

pub const HEADLINE_STATS: [Stat; 4] = [
    Stat { end: 10_000.0, label: "Students Helped", emoji: "🎓", suffix: "+", decimals: 0, format: StatFormat::Number },
    Stat { end: 95.0, label: "Found Clarity", emoji: "✨", suffix: "", decimals: 0, format: StatFormat::Percentage },
    Stat { end: 4.9, label: "User Rating", emoji: "⭐", suffix: "", decimals: 1, format: StatFormat::Rating },
    Stat { end: 24.0, label: "Available", emoji: "🌙", suffix: "", decimals: 0, format: StatFormat::Time },
];

impl Stat {
    /// Count-up parameters for this stat.
    pub fn request(&self) -> CountUpRequest {
        let suffix = match self.format {
            StatFormat::Percentage => "%".to_owned(),
            StatFormat::Rating => format!("{}/5", self.suffix),
            StatFormat::Number | StatFormat::Time => self.suffix.to_owned(),
        };
        let separator = match self.format {
            StatFormat::Time => None,
            _ => Some(DEFAULT_SEPARATOR),
        };
        CountUpRequest::new(self.end)
            .with_duration_ms(STAT_DURATION_MS)
            .with_decimals(self.decimals)
            .with_suffix(suffix)
            .with_separator(separator)
    }

    /// Fixed text that replaces the animated count, if any.
    pub fn static_label(&self) -> Option<&'static str> {
        match self.format {
            StatFormat::Time => Some(ALWAYS_ON_LABEL),
            _ => None,
        }
    }
}
