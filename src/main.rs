//! Binary entry point. The bootstrapping here is deliberately thin: measure
//! the terminal once for the initial layout, build the empty application
//! state, and drive the Ratatui event loop until the user exits.
use anyhow::Context;
use setlist_manager::{run_app, App};

/// Measure the terminal and launch the Ratatui event loop.
///
/// Returning a `Result` bubbles up fatal initialization problems (for
/// example running without a real terminal attached) instead of crashing
/// silently.
fn main() -> anyhow::Result<()> {
    let (_cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;

    let mut app = App::new(rows);
    run_app(&mut app)
}
