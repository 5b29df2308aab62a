pub mod commands;
pub mod scheduler;

pub use commands::{dispatch, parse_command, Command};
pub use scheduler::{run_ticker, tick_once};
