mod cli;
mod menu;

pub(crate) use cli::as_cli;
pub(crate) use menu::as_menu;
