//! Domain model shared by the list store and the TUI. The intent is that the
//! type stays a light-weight data holder so other layers can focus on state
//! transitions and presentation logic.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A song on the setlist. A song is nothing more than its trimmed title:
/// there is no stable identity behind it, and two entries with the same
/// title are distinct songs distinguished only by their position in a list.
pub struct Song {
    /// Title displayed in the Set List and Used Songs panels. Always trimmed
    /// and never empty; `Song::new` is the only constructor and enforces
    /// both.
    pub title: String,
}

impl Song {
    /// Build a song from raw user input. The input is trimmed first, and a
    /// value that trims to nothing yields `None` so blank submissions never
    /// become entries.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                title: trimmed.to_string(),
            })
        }
    }
}

impl fmt::Display for Song {
    /// Write the title to any formatter. Display is implemented so the type
    /// plays nicely with Ratatui widgets that consume strings implicitly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
