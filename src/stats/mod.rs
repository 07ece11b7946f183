//! Derived summary views over the current record set. Purely functional over
//! a snapshot from the store; recomputed from scratch on every call.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::Expense;

/// Sum of amounts per category. Categories with no records are absent.
pub(crate) fn totals_by_category(expenses: &[Expense]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for e in expenses {
        *totals.entry(e.category.clone()).or_insert(Decimal::ZERO) += e.amount;
    }
    totals
}

/// Sum of amounts per calendar month (`YYYY-MM`), chronologically ascending.
/// Months with no records are absent; no gap-filling with zero.
pub(crate) fn totals_by_month(expenses: &[Expense]) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for e in expenses {
        *totals.entry(e.month_key()).or_insert(Decimal::ZERO) += e.amount;
    }
    totals.into_iter().collect()
}

/// Sum of all amounts across the record set.
pub(crate) fn grand_total(expenses: &[Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}
