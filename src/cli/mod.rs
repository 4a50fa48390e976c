//! Command-line entry point: the interactive browser plus scriptable subcommands

mod commands;
mod console;

pub use commands::{Cli, Commands, execute, run};
pub use console::ConsoleHost;
