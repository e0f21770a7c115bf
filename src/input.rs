//! The single-line text buffer backing the "Enter song" field. The buffer is
//! deliberately independent of the list store: any text, including blanks,
//! is acceptable while typing, and only submission decides whether a song is
//! created.

use crate::store::SetlistStore;

/// Text being typed for a new song. Cleared only after a successful add, so
/// a blank submission leaves whatever whitespace the user typed in place.
#[derive(Debug, Default)]
pub struct InputBuffer {
    value: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents, untrimmed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the buffer wholesale. Blank text is fine here; validation
    /// only happens on submit.
    pub fn set<S: Into<String>>(&mut self, text: S) {
        self.value = text.into();
    }

    /// Append a typed character, ignoring control characters the same way
    /// the form fields elsewhere in this codebase do.
    pub fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Remove the last character, if any.
    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Character count used to position the terminal cursor after the typed
    /// text.
    pub fn len_chars(&self) -> usize {
        self.value.chars().count()
    }

    /// Hand the current value to the store. The buffer is cleared only when
    /// the store actually created a song; a blank value is a silent no-op
    /// that leaves the buffer untouched.
    pub fn submit(&mut self, store: &mut SetlistStore) -> bool {
        let added = store.add(&self.value);
        if added {
            self.clear();
        }
        added
    }
}
