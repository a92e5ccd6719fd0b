//! Data models for paper records supplied by the search collaborator.
//!
//! All models use `#[serde(default)]` for optional fields and
//! `#[serde(rename_all = "camelCase")]` to match the wire naming.

mod author;
mod paper;

pub use author::Author;
pub use paper::{Journal, JournalInfo, Paper, SearchResult};
