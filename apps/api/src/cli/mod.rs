// Command-line surface: clap arguments and the interactive menu.

pub mod args;
pub mod menu;

pub use args::{Cli, Command};
pub use menu::run_menu;
