use anyhow::{Context, Result};

use crate::db::Database;

/// Write stored expenses to a CSV file, optionally restricted to one
/// `YYYY-MM` month. Returns the number of exported records.
pub(crate) fn export_to_csv(db: &Database, path: &str, month: Option<&str>) -> Result<usize> {
    let expenses = db.get_expenses()?;
    let expenses: Vec<_> = match month {
        Some(m) => expenses
            .into_iter()
            .filter(|e| e.month_key() == m)
            .collect(),
        None => expenses,
    };

    if expenses.is_empty() {
        return Ok(0);
    }

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {path}"))?;
    wtr.write_record(["id", "date", "amount", "category", "description"])?;
    for e in &expenses {
        wtr.write_record([
            e.id.unwrap_or(0).to_string(),
            e.date_string(),
            format!("{:.2}", e.amount),
            e.category.clone(),
            e.description.clone(),
        ])?;
    }
    wtr.flush().context("Failed to flush export file")?;

    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_export_writes_all_records() {
        let db = Database::open_in_memory().unwrap();
        db.add_expense(date("2025-03-03"), dec!(50.00), "Food", "Food")
            .unwrap();
        db.add_expense(date("2025-02-01"), dec!(750.00), "Housing", "Rent")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let count = export_to_csv(&db, path.to_str().unwrap(), None).unwrap();
        assert_eq!(count, 2);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("id,date,amount,category,description"));
        assert!(contents.contains("2025-02-01,750.00,Housing,Rent"));
    }

    #[test]
    fn test_export_month_filter() {
        let db = Database::open_in_memory().unwrap();
        db.add_expense(date("2025-03-03"), dec!(50.00), "Food", "")
            .unwrap();
        db.add_expense(date("2025-02-01"), dec!(750.00), "Housing", "")
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("march.csv");
        let count = export_to_csv(&db, path.to_str().unwrap(), Some("2025-03")).unwrap();
        assert_eq!(count, 1);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Food"));
        assert!(!contents.contains("Housing"));
    }

    #[test]
    fn test_export_empty_store_writes_nothing() {
        let db = Database::open_in_memory().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        let count = export_to_csv(&db, path.to_str().unwrap(), None).unwrap();
        assert_eq!(count, 0);
        assert!(!path.exists());
    }
}
