#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::charts::{escape, pie_chart, trend_chart};
use super::{render_page, ExpenseResponse};
use crate::models::Expense;

fn sample() -> Vec<Expense> {
    let mut out = Vec::new();
    for (i, (date, amount, category, description)) in [
        ("2025-03-03", dec!(50.00), "Food", "Food"),
        ("2025-02-01", dec!(750.00), "Housing", "Rent for February"),
        ("2025-03-03", dec!(15.00), "Pharmacy", "Dm"),
    ]
    .into_iter()
    .enumerate()
    {
        let mut e = Expense::new(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            amount,
            category.into(),
            description.into(),
        );
        e.id = Some(i as i64 + 1);
        out.push(e);
    }
    out
}

// ── Charts ────────────────────────────────────────────────────

#[test]
fn test_pie_chart_has_one_wedge_per_category() {
    let data = sample();
    let totals = crate::stats::totals_by_category(&data);
    let svg = pie_chart(&totals);
    assert_eq!(svg.matches("<path").count(), 3);
    // Legend names every category with its share
    assert!(svg.contains("Housing"));
    assert!(svg.contains("Food"));
    assert!(svg.contains("Pharmacy"));
}

#[test]
fn test_pie_chart_single_category_is_full_circle() {
    let mut totals = BTreeMap::new();
    totals.insert("Food".to_string(), dec!(50.00));
    let svg = pie_chart(&totals);
    assert!(svg.contains("<circle"));
    assert!(!svg.contains("<path"));
    assert!(svg.contains("Food (100.0%)"));
}

#[test]
fn test_pie_chart_empty_placeholder() {
    let svg = pie_chart(&BTreeMap::new());
    assert!(svg.contains("no data available"));
    assert!(!svg.contains("<path"));
}

#[test]
fn test_trend_chart_marks_every_month() {
    let data = sample();
    let totals = crate::stats::totals_by_month(&data);
    let svg = trend_chart(&totals);
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("2025-02"));
    assert!(svg.contains("2025-03"));
}

#[test]
fn test_trend_chart_single_month_has_no_line() {
    let totals = vec![("2025-03".to_string(), dec!(65.00))];
    let svg = trend_chart(&totals);
    assert_eq!(svg.matches("<circle").count(), 1);
    // Axes are lines; the trend path itself is absent
    assert!(!svg.contains("<path"));
}

#[test]
fn test_escape() {
    assert_eq!(escape("Food & Drink <x>"), "Food &amp; Drink &lt;x&gt;");
    assert_eq!(escape("plain"), "plain");
}

// ── Page & JSON shapes ────────────────────────────────────────

#[test]
fn test_render_page_embeds_summary_and_charts() {
    let page = render_page(&sample());
    assert!(page.contains("Expense Tracker"));
    assert!(page.contains("€815.00"));
    assert!(page.contains("<svg"));
    assert!(page.contains("Housing"));
}

#[test]
fn test_render_page_empty_store() {
    let page = render_page(&[]);
    assert!(page.contains("no data available"));
    assert!(page.contains("€0.00"));
}

#[test]
fn test_expense_response_json_shape() {
    let data = sample();
    let resp = ExpenseResponse::from(&data[1]);
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["id"], 2);
    assert_eq!(json["date"], "2025-02-01");
    assert_eq!(json["amount"], "750.00");
    assert_eq!(json["category"], "Housing");
    assert_eq!(json["description"], "Rent for February");
}
