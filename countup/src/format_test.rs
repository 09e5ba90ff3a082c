use super::*;

// =============================================================
// Grouping
// =============================================================

#[test]
fn groups_millions_with_commas() {
    assert_eq!(format_number(1_234_567.0, 0, Some(',')), "1,234,567");
}

#[test]
fn groups_exact_thousands() {
    assert_eq!(format_number(10_000.0, 0, Some(',')), "10,000");
}

#[test]
fn short_numbers_are_not_grouped() {
    assert_eq!(format_number(95.0, 0, Some(',')), "95");
    assert_eq!(format_number(999.0, 0, Some(',')), "999");
}

#[test]
fn no_separator_leaves_digits_plain() {
    assert_eq!(format_number(1_234_567.0, 0, None), "1234567");
}

#[test]
fn custom_separator_char() {
    assert_eq!(format_number(1_234_567.0, 0, Some('.')), "1.234.567");
}

#[test]
fn negative_sign_is_not_grouped() {
    assert_eq!(format_number(-123_456.0, 0, Some(',')), "-123,456");
    assert_eq!(format_number(-123.0, 0, Some(',')), "-123");
}

#[test]
fn rounds_to_whole_before_grouping() {
    assert_eq!(format_number(9_999.6, 0, Some(',')), "10,000");
}

// =============================================================
// Fractional output
// =============================================================

#[test]
fn one_decimal_rating() {
    assert_eq!(format_number(4.9, 1, Some(',')), "4.9");
}

#[test]
fn fractional_output_is_never_grouped() {
    assert_eq!(format_number(12_345.5, 1, Some(',')), "12345.5");
}

#[test]
fn pads_to_requested_decimals() {
    assert_eq!(format_number(3.0, 2, None), "3.00");
}

#[test]
fn zero_renders_as_zero() {
    assert_eq!(format_number(0.0, 0, Some(',')), "0");
    assert_eq!(format_number(0.0, 1, Some(',')), "0.0");
}

// =============================================================
// Halfway values
// =============================================================

#[test]
fn whole_ties_round_away_from_zero() {
    assert_eq!(format_number(0.5, 0, Some(',')), "1");
    assert_eq!(format_number(2.5, 0, Some(',')), "3");
    assert_eq!(format_number(-2.5, 0, Some(',')), "-3");
}

#[test]
fn fractional_ties_round_away_from_zero() {
    assert_eq!(format_number(0.25, 1, None), "0.3");
    assert_eq!(format_number(0.125, 2, None), "0.13");
}

#[test]
fn tie_rounding_carries_into_grouping() {
    assert_eq!(format_number(1_234.5, 0, Some(',')), "1,235");
    assert_eq!(format_number(999_999.5, 0, Some(',')), "1,000,000");
}

#[test]
fn near_ties_follow_their_binary_value() {
    // Neither literal is exactly representable; both sit just below the tie.
    assert_eq!(format_number(0.15, 1, None), "0.1");
    assert_eq!(format_number(1.005, 2, None), "1.00");
}

#[test]
fn non_ties_are_unchanged() {
    assert_eq!(format_number(2.4, 0, None), "2");
    assert_eq!(format_number(2.6, 0, None), "3");
}

// =============================================================
// Degenerate input
// =============================================================

#[test]
fn nan_passes_through_ungrouped() {
    assert_eq!(format_number(f64::NAN, 0, Some(',')), "NaN");
}

#[test]
fn infinity_passes_through_ungrouped() {
    assert_eq!(format_number(f64::INFINITY, 0, Some(',')), "inf");
}
