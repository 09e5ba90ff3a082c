//! Progress and easing curves.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Fraction of the animation completed after `elapsed_ms`, clamped to `[0, 1]`.
///
/// A non-positive duration is treated as already complete.
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || duration_ms.is_nan() {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Ease-out cubic: fast start, decelerating to zero slope at `p = 1`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Linear interpolation from `from` to `to` by an already-eased factor.
#[must_use]
pub fn interpolate(from: f64, to: f64, eased: f64) -> f64 {
    from + (to - from) * eased
}
