//! Browser chart dashboard: a small read-only axum app over the expense store.

mod charts;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use crate::db::Database;
use crate::models::Expense;
use crate::stats;

#[derive(Clone)]
struct AppState {
    db: Arc<Mutex<Database>>,
}

#[derive(Debug, Serialize)]
struct ExpenseResponse {
    id: i64,
    date: String,
    amount: String,
    category: String,
    description: String,
}

impl From<&Expense> for ExpenseResponse {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id.unwrap_or(0),
            date: e.date_string(),
            amount: format!("{:.2}", e.amount),
            category: e.category.clone(),
            description: e.description.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CategoryTotalResponse {
    category: String,
    total: String,
}

#[derive(Debug, Serialize)]
struct MonthTotalResponse {
    month: String,
    total: String,
}

/// Serve the dashboard on localhost until the process is interrupted.
pub(crate) fn serve(db: Database, port: u16) -> anyhow::Result<()> {
    let state = AppState {
        db: Arc::new(Mutex::new(db)),
    };
    let app = router(state);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        println!("Dashboard running at http://{addr}");
        println!("Press Ctrl+C to stop.");
        axum::serve(listener, app).await?;
        Ok(())
    })
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/expenses", get(api_expenses))
        .route("/api/totals/categories", get(api_category_totals))
        .route("/api/totals/months", get(api_month_totals))
        .with_state(state)
}

/// Snapshot of the record set for one request.
fn snapshot(state: &AppState) -> Result<Vec<Expense>, StatusCode> {
    let Ok(db) = state.db.lock() else {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    };
    db.get_expenses().map_err(|e| {
        eprintln!("Error reading expenses: {e}");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

// ── Handlers ──────────────────────────────────────────────────

async fn dashboard(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let expenses = snapshot(&state)?;
    Ok(Html(render_page(&expenses)))
}

async fn api_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, StatusCode> {
    let expenses = snapshot(&state)?;
    Ok(Json(expenses.iter().map(ExpenseResponse::from).collect()))
}

async fn api_category_totals(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryTotalResponse>>, StatusCode> {
    let expenses = snapshot(&state)?;
    let totals = stats::totals_by_category(&expenses)
        .into_iter()
        .map(|(category, total)| CategoryTotalResponse {
            category,
            total: format!("{total:.2}"),
        })
        .collect();
    Ok(Json(totals))
}

async fn api_month_totals(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthTotalResponse>>, StatusCode> {
    let expenses = snapshot(&state)?;
    let totals = stats::totals_by_month(&expenses)
        .into_iter()
        .map(|(month, total)| MonthTotalResponse {
            month,
            total: format!("{total:.2}"),
        })
        .collect();
    Ok(Json(totals))
}

// ── Page rendering ────────────────────────────────────────────

fn render_page(expenses: &[Expense]) -> String {
    let by_category = stats::totals_by_category(expenses);
    let by_month = stats::totals_by_month(expenses);
    let total = stats::grand_total(expenses);

    let pie = charts::pie_chart(&by_category);
    let trend = charts::trend_chart(&by_month);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>fintrack dashboard</title>
<style>
  body {{ font-family: sans-serif; max-width: 720px; margin: 2rem auto; color: #2f4f4f; }}
  h1 {{ text-align: center; }}
  .summary {{ display: flex; justify-content: space-around; margin-bottom: 2rem; }}
  .summary div {{ text-align: center; }}
  .summary .value {{ font-size: 1.6rem; font-weight: bold; }}
  figure {{ margin: 2rem 0; }}
</style>
</head>
<body>
<h1>Expense Tracker</h1>
<div class="summary">
  <div><div class="value">{count}</div>records</div>
  <div><div class="value">€{total:.2}</div>total spent</div>
  <div><div class="value">{categories}</div>categories</div>
</div>
<figure>{pie}</figure>
<figure>{trend}</figure>
</body>
</html>
"#,
        count = expenses.len(),
        categories = by_category.len(),
    )
}

#[cfg(test)]
mod tests;
