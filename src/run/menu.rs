use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

use crate::db::Database;
use crate::models::{parse_amount, parse_date};
use crate::stats;
use crate::ui::tables;

/// Interactive numbered menu on stdin/stdout. Validation and not-found errors
/// are reported as a message and the session continues; only I/O failures on
/// the terminal itself end the loop with an error.
pub(crate) fn as_menu(db: &mut Database) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            break;
        };
        match choice.trim() {
            "1" => add_expense(&mut input, db)?,
            "2" => view_all(db),
            "3" => view_by_category(&mut input, db)?,
            "4" => view_by_date_range(&mut input, db)?,
            "5" => category_totals(db),
            "6" => month_totals(db),
            "7" => delete_expense(&mut input, db)?,
            "0" => break,
            _ => println!("Enter a valid choice."),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn print_menu() {
    let divider = "=".repeat(20);
    println!("\nExpense Tracker\n{divider}");
    println!("1. Add expense");
    println!("2. View all expenses");
    println!("3. View expenses by category");
    println!("4. View expenses by date range");
    println!("5. Totals by category");
    println!("6. Totals by month");
    println!("7. Delete expense");
    println!("0. Exit\n{divider}");
}

// ── Menu actions ──────────────────────────────────────────────

fn add_expense(input: &mut impl BufRead, db: &Database) -> Result<()> {
    let Some(amount) = prompt_amount(input)? else {
        return Ok(());
    };
    let Some(description) = prompt(input, "Enter description (optional): ")? else {
        return Ok(());
    };
    let Some(category) = prompt(input, "Enter category: ")? else {
        return Ok(());
    };
    let Some(date) = prompt_date(input, "Enter date")? else {
        return Ok(());
    };

    match db.add_expense(date, amount, category.trim(), description.trim()) {
        Ok(id) => println!("Expense added with ID: {id}"),
        Err(e) => println!("Failed to add expense: {e}"),
    }
    Ok(())
}

fn view_all(db: &Database) {
    match db.get_expenses() {
        Ok(expenses) => {
            println!("\nAll expenses:");
            print!("{}", tables::expense_table(&expenses));
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn view_by_category(input: &mut impl BufRead, db: &Database) -> Result<()> {
    let Some(category) = prompt(input, "Enter category: ")? else {
        return Ok(());
    };
    match db.get_expenses_by_category(category.trim()) {
        Ok(expenses) => {
            println!("\nExpenses for '{}':", category.trim());
            print!("{}", tables::expense_table(&expenses));
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn view_by_date_range(input: &mut impl BufRead, db: &Database) -> Result<()> {
    let Some(start) = prompt_date(input, "Enter start date")? else {
        return Ok(());
    };
    let Some(end) = prompt_date(input, "Enter end date")? else {
        return Ok(());
    };
    match db.get_expenses_by_date_range(start, end) {
        Ok(expenses) => {
            println!("\nExpenses from {start} to {end}:");
            print!("{}", tables::expense_table(&expenses));
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn category_totals(db: &Database) {
    match db.get_expenses() {
        Ok(expenses) => {
            println!("\nExpenses by category:");
            print!(
                "{}",
                tables::category_totals_table(&stats::totals_by_category(&expenses))
            );
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn month_totals(db: &Database) {
    match db.get_expenses() {
        Ok(expenses) => {
            println!("\nExpenses by month:");
            print!(
                "{}",
                tables::month_totals_table(&stats::totals_by_month(&expenses))
            );
        }
        Err(e) => println!("Error: {e}"),
    }
}

fn delete_expense(input: &mut impl BufRead, db: &Database) -> Result<()> {
    let Some(id_str) = prompt(input, "Enter expense ID to delete: ")? else {
        return Ok(());
    };
    let Ok(id) = id_str.trim().parse::<i64>() else {
        println!("Invalid expense ID.");
        return Ok(());
    };
    match db.delete_expense(id) {
        Ok(()) => println!("Expense deleted successfully."),
        Err(e) => println!("Failed to delete expense: {e}"),
    }
    Ok(())
}

// ── Prompt helpers ────────────────────────────────────────────

/// Print a prompt and read one line. `None` on EOF.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}

/// Keep asking until the input parses as an amount. `None` on EOF.
fn prompt_amount(input: &mut impl BufRead) -> Result<Option<rust_decimal::Decimal>> {
    loop {
        let Some(raw) = prompt(input, "Enter amount: ")? else {
            return Ok(None);
        };
        match parse_amount(&raw) {
            Ok(amount) => return Ok(Some(amount)),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Keep asking until the input parses as a date. Empty input means today.
/// `None` on EOF.
fn prompt_date(input: &mut impl BufRead, label: &str) -> Result<Option<NaiveDate>> {
    loop {
        let Some(raw) = prompt(
            input,
            &format!("{label} (YYYY-MM-DD, press Enter for today): "),
        )?
        else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(Some(Local::now().date_naive()));
        }
        match parse_date(&raw) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => println!("Invalid date format. Please use YYYY-MM-DD."),
        }
    }
}
