//! Interactive shell for the virtual file system.
//!
//! This module provides the command-line front end:
//! - Command parsing with usage checks
//! - Dispatch to the namespace store
//! - Output formatting for results, warnings and errors

mod command;
mod session;

pub use command::{
    format_help, get_command_help, parse_input, Command, CommandError, CommandInfo,
};
pub use session::{Outcome, Shell};
