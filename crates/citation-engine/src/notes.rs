//! Ordered store of user-approved note text.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A block of accepted free-form text.
///
/// May embed zero or more numbered full-reference lines inside generated
/// prose. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque note text as accepted by the user.
    pub raw_text: String,
}

impl Note {
    /// The note text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw_text
    }
}

/// Append-only, insertion-ordered collection of notes.
///
/// No deduplication happens here; identical notes may be stored twice and
/// are collapsed downstream by the reference set.
#[derive(Debug, Default, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a note.
    ///
    /// The text is trimmed before storing. Text that trims to empty is
    /// rejected with [`EngineError::EmptyNote`] and the store is unchanged.
    pub fn append(&mut self, text: impl AsRef<str>) -> EngineResult<()> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            tracing::warn!("rejected empty note");
            return Err(EngineError::EmptyNote);
        }
        self.notes.push(Note { raw_text: trimmed.to_string() });
        Ok(())
    }

    /// Read-only snapshot of all notes, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    /// Iterate over note texts in insertion order.
    pub fn iter_text(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().map(Note::as_str)
    }

    /// Number of stored notes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the store holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
