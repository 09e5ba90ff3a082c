//! Wall-clock helpers for animation timing and message timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: f64 = 1_440.0;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Browser timezone offset in minutes, with the sign convention of
/// `Date.getTimezoneOffset` (UTC minus local). The server renders in UTC.
pub fn local_offset_minutes() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_timezone_offset()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// `HH:MM` (24h) wall-clock label for an epoch timestamp.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn clock_label(timestamp_ms: f64, utc_offset_minutes: f64) -> String {
    let local_minutes = (timestamp_ms / MS_PER_MINUTE).floor() - utc_offset_minutes;
    let minute_of_day = local_minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}
