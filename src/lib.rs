//! Core library surface for the Setlist Manager TUI application.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! the list store and input buffer hold all of the mutable state, the layout
//! sizer derives the space the song panels get, and the `ui` module wires
//! them to a Ratatui event loop.
pub mod input;
pub mod layout;
pub mod models;
pub mod store;
pub mod ui;

/// The text buffer behind the "Enter song" field.
pub use input::InputBuffer;

/// Layout derivation: chrome metrics, the keyboard signal, and the sizer.
pub use layout::{ChromeMetrics, KeyboardEvent, LayoutSizer};

/// The single domain type other layers manipulate.
pub use models::Song;

/// The in-memory set-list / used-songs store.
pub use store::{SetlistStore, StoreError};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
