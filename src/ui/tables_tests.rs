#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use super::tables::{category_totals_table, expense_table, month_totals_table};
use crate::models::Expense;

fn sample() -> Vec<Expense> {
    let mut e = Expense::new(
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        dec!(50.00),
        "Food".into(),
        "lunch at the corner place".into(),
    );
    e.id = Some(7);
    vec![e]
}

#[test]
fn test_expense_table_contains_fields() {
    let table = expense_table(&sample());
    assert!(table.contains("7"));
    assert!(table.contains("2025-03-03"));
    assert!(table.contains("€50.00"));
    assert!(table.contains("Food"));
    assert!(table.contains("lunch at the corner place"));
}

#[test]
fn test_expense_table_empty() {
    assert_eq!(expense_table(&[]), "No expenses found.");
}

#[test]
fn test_category_totals_table() {
    let mut totals = BTreeMap::new();
    totals.insert("Housing".to_string(), dec!(750.00));
    totals.insert("Food".to_string(), dec!(50.00));
    let table = category_totals_table(&totals);
    assert!(table.contains("Housing"));
    assert!(table.contains("€750.00"));
    // BTreeMap iteration: Food is listed before Housing
    assert!(table.find("Food").unwrap() < table.find("Housing").unwrap());
}

#[test]
fn test_month_totals_table() {
    let totals = vec![
        ("2025-02".to_string(), dec!(750.00)),
        ("2025-03".to_string(), dec!(65.00)),
    ];
    let table = month_totals_table(&totals);
    assert!(table.contains("2025-02"));
    assert!(table.contains("€65.00"));
}

#[test]
fn test_totals_tables_empty() {
    assert_eq!(category_totals_table(&BTreeMap::new()), "No expenses found.");
    assert_eq!(month_totals_table(&[]), "No expenses found.");
}
