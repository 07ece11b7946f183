mod db;
mod error;
mod export;
mod models;
mod run;
mod stats;
mod ui;
mod web;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path();
    let mut db = db::Database::open(&db_path)
        .with_context(|| format!("Failed to open expense database: {}", db_path.display()))?;

    match args.len() {
        1 => run::as_menu(&mut db),
        _ => run::as_cli(&args, db),
    }
}

/// The store lives in the current working directory unless FINTRACK_DB
/// points elsewhere.
fn get_db_path() -> std::path::PathBuf {
    std::env::var_os("FINTRACK_DB")
        .map(Into::into)
        .unwrap_or_else(|| "finances.db".into())
}
