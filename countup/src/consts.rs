//! Shared defaults for the count-up crate.

// ── Timing ──────────────────────────────────────────────────────

/// Total animation time when a request does not override it.
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of the display region that must be visible to start the count.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Slack below the threshold still counted as crossing it. Browsers report
/// subpixel-rounded ratios such as `0.0999` on the crossing callback itself.
pub const VISIBILITY_EPSILON: f64 = 1e-3;

// ── Formatting ──────────────────────────────────────────────────

/// Thousands separator used for whole-number displays.
pub const DEFAULT_SEPARATOR: char = ',';

/// Value every display starts from.
pub const START_VALUE: f64 = 0.0;
