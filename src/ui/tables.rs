use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::Expense;
use crate::ui::util::{format_amount, truncate};

const DESCRIPTION_WIDTH: usize = 40;

/// Aligned text table of expense records.
pub(crate) fn expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".into();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<5} {:<12} {:>14} {:<18} Description\n",
        "ID", "Date", "Amount", "Category"
    ));
    out.push_str(&"─".repeat(72));
    out.push('\n');
    for e in expenses {
        out.push_str(&format!(
            "{:<5} {:<12} {:>14} {:<18} {}\n",
            e.id.unwrap_or(0),
            e.date_string(),
            format_amount(e.amount),
            truncate(&e.category, 18),
            truncate(&e.description, DESCRIPTION_WIDTH),
        ));
    }
    out
}

/// Aligned text table of category totals.
pub(crate) fn category_totals_table(totals: &BTreeMap<String, Decimal>) -> String {
    if totals.is_empty() {
        return "No expenses found.".into();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<24} Total\n", "Category"));
    out.push_str(&"─".repeat(40));
    out.push('\n');
    for (category, total) in totals {
        out.push_str(&format!(
            "{:<24} {}\n",
            truncate(category, 24),
            format_amount(*total)
        ));
    }
    out
}

/// Aligned text table of monthly totals, chronologically ascending.
pub(crate) fn month_totals_table(totals: &[(String, Decimal)]) -> String {
    if totals.is_empty() {
        return "No expenses found.".into();
    }

    let mut out = String::new();
    out.push_str(&format!("{:<10} Total\n", "Month"));
    out.push_str(&"─".repeat(26));
    out.push('\n');
    for (month, total) in totals {
        out.push_str(&format!("{month:<10} {}\n", format_amount(*total)));
    }
    out
}
