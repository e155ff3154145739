//! Command implementations for leafgen.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod list;
mod render;
mod theme;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List => list::cmd_list(),
        Command::Render(args) => render::cmd_render(args),
        Command::Theme => theme::cmd_theme(),
    }
}
