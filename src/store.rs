//! The in-memory list store that every interaction ultimately mutates. Two
//! ordered collections live here: the set list (songs still to play) and the
//! used list (songs already played). Every operation is synchronous and
//! total; the only rejectable input is a blank title, which is a silent
//! no-op rather than an error.

use thiserror::Error;

use crate::models::Song;

/// Domain errors surfaced by the store. The store never panics on bad input;
/// an out-of-range move is reported here so the UI can show it in the footer
/// and carry on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A move referenced a set-list position that no longer exists. The UI
    /// derives indices at render time, so in the single-threaded event loop
    /// this should not happen, but a stale index must degrade to a visible
    /// message instead of a crash.
    #[error("no song at position {index} (set list holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered set-list and used-songs collections plus the mutations the UI
/// drives. Songs only ever move between the two lists; nothing here deletes
/// a song once it exists.
#[derive(Debug, Default)]
pub struct SetlistStore {
    set_list: Vec<Song>,
    used: Vec<Song>,
}

impl SetlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Songs not yet played, in the order they were added or returned by a
    /// reset.
    pub fn set_list(&self) -> &[Song] {
        &self.set_list
    }

    /// Songs already played, in the order they were moved.
    pub fn used(&self) -> &[Song] {
        &self.used
    }

    /// Append a new song to the end of the set list. Input that trims to an
    /// empty string is rejected silently: no entry is created, no error is
    /// raised, and `false` tells the caller the buffer should stay as-is.
    pub fn add(&mut self, raw: &str) -> bool {
        match Song::new(raw) {
            Some(song) => {
                self.set_list.push(song);
                true
            }
            None => false,
        }
    }

    /// Move the song at `index` from the set list to the end of the used
    /// list. Entries after `index` shift left, preserving their relative
    /// order. An out-of-range index leaves both lists untouched.
    pub fn move_to_used(&mut self, index: usize) -> Result<(), StoreError> {
        if index >= self.set_list.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.set_list.len(),
            });
        }
        let song = self.set_list.remove(index);
        self.used.push(song);
        Ok(())
    }

    /// Return every used song to the set list in one batch. Existing set-list
    /// entries keep their relative order and precede the returned ones, which
    /// arrive in their used-list order. Returns how many songs moved; zero
    /// means the used list was already empty and nothing changed.
    pub fn reset(&mut self) -> usize {
        let moved = self.used.len();
        self.set_list.append(&mut self.used);
        moved
    }

    /// Whether the reset control should be offered: exactly when the set
    /// list has run dry and there are used songs to bring back. Computed on
    /// demand so it can never drift from the lists themselves.
    pub fn reset_available(&self) -> bool {
        self.set_list.is_empty() && !self.used.is_empty()
    }
}
