mod expense;

pub use expense::Expense;
pub(crate) use expense::{parse_amount, parse_date, DATE_FORMAT};
