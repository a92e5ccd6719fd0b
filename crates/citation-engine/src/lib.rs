//! Bibliographic citation engine for a thesis-drafting assistant.
//!
//! Deterministically renders paper records into canonical APA-style full
//! references and in-text citation fragments, and solves the inverse
//! problem: re-extracting canonical reference strings from free-form
//! generated text that only loosely embeds them, deduplicating the results
//! into a stable reference list.
//!
//! # Features
//!
//! - **APA formatting**: full references (full author names) and in-text
//!   fragments (surname rules: one, two, "et al.")
//! - **Round-trip safe**: formatter and extractor share one canonical
//!   template, so self-generated text re-extracts byte-identical
//! - **Anchor-level diagnostics**: the extraction parser reports which
//!   template anchor a rejected line failed on
//! - **Synchronous and pure**: no network, no shared mutable state; the
//!   search and generation services are the caller's collaborators
//!
//! # Example
//!
//! ```
//! use citation_engine::citation::format_full_reference;
//! use citation_engine::models::{Author, Journal, Paper};
//! use citation_engine::{NoteStore, ReferenceExtractor};
//!
//! let paper = Paper {
//!     title: Some("On Widgets".into()),
//!     year: Some(2021),
//!     authors: vec![Author::new("Jane Q. Smith")],
//!     url: Some("http://x.test/1".into()),
//!     journal: Some(Journal::Name("Journal of Widgets".into())),
//!     ..Default::default()
//! };
//!
//! let reference = format_full_reference(&paper);
//! let mut notes = NoteStore::new();
//! notes.append(format!("Some prose.\n1. {reference}\nMore prose.")).unwrap();
//!
//! let set = ReferenceExtractor::new().extract_from_store(&notes);
//! assert_eq!(set.to_ordered_list(), vec![reference]);
//! ```

pub mod citation;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatters;
pub mod models;
pub mod notes;
pub mod prompt;
pub mod references;

pub use error::{EngineError, EngineResult};
pub use extract::ReferenceExtractor;
pub use notes::{Note, NoteStore};
pub use references::ReferenceSet;
