//! Ratatui front-end split across the application state (`app`) and the
//! terminal driver (`terminal`).

mod app;
mod terminal;

pub use app::App;
pub use terminal::run_app;
