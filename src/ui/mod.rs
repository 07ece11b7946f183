pub(crate) mod tables;
pub(crate) mod util;

#[cfg(test)]
#[path = "util_tests.rs"]
mod util_tests;

#[cfg(test)]
#[path = "tables_tests.rs"]
mod tables_tests;
