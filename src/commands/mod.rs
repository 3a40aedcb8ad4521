//! CLI commands

pub mod agents;
pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod ml;
pub mod tickets;

use autosupport_console::output::OutputFormat;
use autosupport_console::views::Loadable;
use serde::Serialize;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Print a page and turn a failed fetch into a command error
pub fn show_page<T: Serialize>(
    state: &Loadable<T>,
    format: OutputFormat,
    render: impl FnOnce(&Loadable<T>) -> String,
) -> CommandResult {
    format.print(state, render);
    match state.error() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
