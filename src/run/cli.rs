use anyhow::Result;

use crate::db::Database;
use crate::export;
use crate::stats;
use crate::ui::tables;
use crate::ui::util::format_amount;
use crate::web;

pub(crate) fn as_cli(args: &[String], db: Database) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..], &db),
        "export" => cli_export(&args[2..], &db),
        "dashboard" | "serve" => cli_dashboard(&args[2..], db),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("fintrack {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("fintrack — local-only personal expense tracker");
    println!();
    println!("Usage: fintrack [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch the interactive menu");
    println!("  summary [YYYY-MM]             Print a monthly expense summary");
    println!("  export [path]                 Export expenses to CSV");
    println!("    --month <YYYY-MM>           Restrict export to one month");
    println!("  dashboard                     Serve the browser chart dashboard");
    println!("    --port <N>                  Port to listen on (default: 8080)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("The store file is ./finances.db unless FINTRACK_DB is set.");
}

fn cli_summary(args: &[String], db: &Database) -> Result<()> {
    let month = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m").to_string());

    let expenses = db.get_expenses()?;
    let monthly: Vec<_> = expenses
        .iter()
        .filter(|e| e.month_key() == month)
        .cloned()
        .collect();

    println!("fintrack — {month}");
    println!("{}", "─".repeat(40));
    println!("  Expenses:   {}", format_amount(stats::grand_total(&monthly)));
    println!("  Records:    {}", monthly.len());
    println!("  All time:   {}", format_amount(stats::grand_total(&expenses)));

    let by_category = stats::totals_by_category(&monthly);
    if !by_category.is_empty() {
        println!();
        print!("{}", tables::category_totals_table(&by_category));
    }

    Ok(())
}

fn cli_export(args: &[String], db: &Database) -> Result<()> {
    let month = args
        .windows(2)
        .find(|w| w[0] == "--month")
        .map(|w| w[1].clone());

    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| match &month {
            Some(m) => format!("fintrack-export-{m}.csv"),
            None => "fintrack-export.csv".into(),
        });

    let count = export::export_to_csv(db, &output_path, month.as_deref())?;
    if count == 0 {
        println!("No expenses to export");
    } else {
        println!("Exported {count} expenses to {output_path}");
    }
    Ok(())
}

fn cli_dashboard(args: &[String], db: Database) -> Result<()> {
    let port = args
        .windows(2)
        .find(|w| w[0] == "--port")
        .and_then(|w| w[1].parse::<u16>().ok())
        .unwrap_or(8080);

    web::serve(db, port)
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
