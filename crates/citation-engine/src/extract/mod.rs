//! Reference re-extraction from free-form note text.
//!
//! Generated prose embeds full references as numbered lines; extraction
//! recovers them by pattern matching and rebuilds the deduplicated reference
//! list from scratch. The match is non-exhaustive by design: a line that
//! deviates from the template is silently skipped, never partially
//! recovered.

mod parser;

pub use parser::{ParseError, ReferenceParts};

use crate::notes::NoteStore;
use crate::references::ReferenceSet;

/// Recovers canonical full-reference strings embedded in note text.
///
/// Stateless; each run is a pure rebuild over the notes it is handed, so
/// repeated extraction over unchanged notes yields an identical set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    /// Create an extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Rebuild the reference set from the given note texts.
    ///
    /// Scan order: notes in the order given, lines top to bottom, matches
    /// left to right; the set preserves first-seen order. Zero matches is a
    /// valid outcome, reported as an empty set for the caller to render as
    /// an explicit "no references" state.
    pub fn extract<'a, I>(&self, notes: I) -> ReferenceSet
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = ReferenceSet::new();
        for (index, note) in notes.into_iter().enumerate() {
            let before = set.len();
            for line in note.lines() {
                scan_line(line, &mut set);
            }
            tracing::debug!(note = index, found = set.len() - before, "scanned note");
        }

        if set.is_empty() {
            tracing::warn!("no references found in notes");
        } else {
            tracing::info!(count = set.len(), "extracted references");
        }
        set
    }

    /// Rebuild the reference set from a note store snapshot.
    #[must_use]
    pub fn extract_from_store(&self, store: &NoteStore) -> ReferenceSet {
        self.extract(store.iter_text())
    }
}

/// Try every `<digits>.` candidate position in a line, resuming after each
/// successful match so one line can yield several references.
fn scan_line(line: &str, set: &mut ReferenceSet) {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let at_run_start = bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit());
        if at_run_start {
            match parser::parse_at(line, i) {
                Ok((parts, end)) => {
                    set.insert(parts.canonical());
                    i = end;
                    continue;
                }
                Err(err) => {
                    tracing::trace!(offset = i, %err, "candidate entry rejected");
                }
            }
        }
        i += 1;
    }
}
