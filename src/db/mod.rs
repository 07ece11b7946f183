mod schema;

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{StoreError, StoreResult};
use crate::models::{Expense, DATE_FORMAT};

/// Handle to the on-disk expense store. All access goes through an explicitly
/// passed `Database`; there is no ambient singleton.
pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> StoreResult<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            // Fresh database - apply full schema
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        // Existing database - check version and apply migrations
        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    // ── Mutations ─────────────────────────────────────────────

    /// Validate and insert a new expense. Returns the assigned id.
    /// A failed add leaves the store unchanged.
    pub(crate) fn add_expense(
        &self,
        date: NaiveDate,
        amount: Decimal,
        category: &str,
        description: &str,
    ) -> StoreResult<i64> {
        if amount < Decimal::ZERO {
            return Err(StoreError::Validation(format!(
                "amount must be non-negative, got {amount}"
            )));
        }
        if amount != amount.round_dp(2) {
            return Err(StoreError::Validation(format!(
                "amount {amount} has more than two decimal places"
            )));
        }

        self.conn.execute(
            "INSERT INTO expenses (date, amount, category, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                date.format(DATE_FORMAT).to_string(),
                amount.to_string(),
                category,
                description,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Delete the expense with the given id. Removes exactly that record;
    /// a repeated delete of the same id fails with `NotFound` again.
    pub(crate) fn delete_expense(&self, id: i64) -> StoreResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot of every stored expense, ordered by id.
    pub(crate) fn get_expenses(&self) -> StoreResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, description FROM expenses ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_expense)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Exact-match filter on category, ordered by id.
    pub(crate) fn get_expenses_by_category(&self, category: &str) -> StoreResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, description FROM expenses
             WHERE category = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![category], row_to_expense)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Inclusive date-range filter, ordered by date then id.
    pub(crate) fn get_expenses_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> StoreResult<Vec<Expense>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, category, description FROM expenses
             WHERE date >= ?1 AND date <= ?2 ORDER BY date, id",
        )?;
        let rows = stmt.query_map(
            params![
                start.format(DATE_FORMAT).to_string(),
                end.format(DATE_FORMAT).to_string(),
            ],
            row_to_expense,
        )?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub(crate) fn count_expenses(&self) -> StoreResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?)
    }
}

// Dates and amounts are stored as TEXT; malformed rows surface as defaults
// rather than aborting the whole query.
fn row_to_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
    let date_str: String = row.get(1)?;
    let amount_str: String = row.get(2)?;
    Ok(Expense {
        id: Some(row.get(0)?),
        date: NaiveDate::parse_from_str(&date_str, DATE_FORMAT).unwrap_or_default(),
        amount: Decimal::from_str(&amount_str).unwrap_or_default(),
        category: row.get(3)?,
        description: row.get(4)?,
    })
}
