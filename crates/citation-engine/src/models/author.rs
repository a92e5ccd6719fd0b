//! Author data model matching the search collaborator's schema.

use serde::{Deserialize, Serialize};

/// An author as attached to a paper record.
///
/// Upstream records carry a single display name; no structured given/family
/// split exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    /// Full display name.
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    /// Create an author from a full display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    /// Get the full name, falling back to the empty string.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Surname, taken as the last whitespace-delimited token of the name.
    ///
    /// Multi-word surnames are not recognized: "Ludwig van Beethoven" yields
    /// "Beethoven".
    #[must_use]
    pub fn surname(&self) -> &str {
        self.full_name().split_whitespace().last().unwrap_or("")
    }
}
