use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{StoreError, StoreResult};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single stored expense entry. Immutable after insertion; corrections are
/// delete + re-add.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// `None` until the store assigns an id on insertion.
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
}

impl Expense {
    pub fn new(date: NaiveDate, amount: Decimal, category: String, description: String) -> Self {
        Self {
            id: None,
            date,
            amount,
            category,
            description,
        }
    }

    /// Year+month grouping key, e.g. `"2025-03"`. Lexicographic order on these
    /// keys is chronological order.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a user-supplied ISO date (`YYYY-MM-DD`).
pub(crate) fn parse_date(input: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| {
        StoreError::Validation(format!(
            "invalid date '{}', expected YYYY-MM-DD",
            input.trim()
        ))
    })
}

/// Parse a user-supplied amount into a two-decimal fixed-point value.
pub(crate) fn parse_amount(input: &str) -> StoreResult<Decimal> {
    use std::str::FromStr;
    Decimal::from_str(input.trim())
        .map_err(|_| StoreError::Validation(format!("invalid amount '{}'", input.trim())))
}
