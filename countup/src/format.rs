//! Number formatting for count-up displays.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render `value` with exactly `decimals` fractional digits.
///
/// Exact halfway values round away from zero (`2.5` -> `"3"`, `0.25` with
/// one decimal -> `"0.3"`). Whole-number output (`decimals == 0`) is grouped in threes from the right
/// when a `separator` is given. Fractional output is never grouped.
#[must_use]
pub fn format_number(value: f64, decimals: usize, separator: Option<char>) -> String {
    let value = if is_exact_tie(value, decimals) { next_away_from_zero(value) } else { value };
    let fixed = format!("{value:.decimals$}");
    match separator {
        Some(sep) if decimals == 0 => group_thousands(&fixed, sep),
        _ => fixed,
    }
}

/// Whether `value` sits exactly halfway between two `decimals`-digit outputs.
///
/// That holds iff `value * 2^(decimals + 1)` is an odd integer; scaling by a
/// power of two is exact, so the check has no rounding error.
#[allow(clippy::float_cmp)]
fn is_exact_tie(value: f64, decimals: usize) -> bool {
    let Ok(exp) = i32::try_from(decimals + 1) else {
        return false;
    };
    let scaled = value * 2f64.powi(exp);
    scaled.is_finite() && scaled.fract() == 0.0 && (scaled % 2.0).abs() == 1.0
}

/// Adjacent float one ulp further from zero. Only called on ties, which are
/// finite and non-zero.
fn next_away_from_zero(value: f64) -> f64 {
    f64::from_bits(value.to_bits() + 1)
}

/// Insert `separator` between every three integer digits.
///
/// A leading minus sign is kept outside the grouping. Anything that is not a
/// plain run of digits (`NaN`, `inf`) is returned unchanged.
fn group_thousands(fixed: &str, separator: char) -> String {
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return fixed.to_owned();
    }

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
