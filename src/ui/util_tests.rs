#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::{format_amount, truncate};

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(50)), "€50.00");
    assert_eq!(format_amount(dec!(15.5)), "€15.50");
    assert_eq!(format_amount(dec!(0)), "€0.00");
}

#[test]
fn test_format_amount_thousand_separators() {
    assert_eq!(format_amount(dec!(1234567.89)), "€1,234,567.89");
    assert_eq!(format_amount(dec!(1000)), "€1,000.00");
    assert_eq!(format_amount(dec!(999.99)), "€999.99");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-750.00)), "-€750.00");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("rent", 10), "rent");
    assert_eq!(truncate("rent", 4), "rent");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("rent for february", 8), "rent fo…");
    assert_eq!(truncate("rent for february", 8).chars().count(), 8);
}

#[test]
fn test_truncate_zero_and_multibyte() {
    assert_eq!(truncate("anything", 0), "");
    assert_eq!(truncate("crème brûlée", 6), "crème…");
}
