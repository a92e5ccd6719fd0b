//! Paper data model matching the search collaborator's schema.

use serde::{Deserialize, Serialize};

use super::Author;

/// A paper record from the external search service.
///
/// Fields may be missing or malformed; accessors resolve absences with
/// defined fallbacks rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// List of authors, in record order.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Landing-page URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Paper abstract.
    #[serde(default)]
    pub r#abstract: Option<String>,

    /// Journal, either a bare name or a structured object.
    #[serde(default)]
    pub journal: Option<Journal>,
}

impl Paper {
    /// Get the paper title, falling back to "Untitled" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Untitled")
    }

    /// Get the URL, falling back to the empty string.
    #[must_use]
    pub fn url_or_default(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Get author names as a comma-separated string.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .filter_map(|a| a.name.as_ref())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Usable journal name, if the record carries one.
    ///
    /// Returns `None` for an absent journal, an empty bare name, or a
    /// structured journal without a non-empty `name`.
    #[must_use]
    pub fn journal_name(&self) -> Option<&str> {
        self.journal.as_ref()?.name()
    }
}

/// Journal field of a paper record.
///
/// Upstream sends either a plain string or an object exposing a `name`,
/// so this deserializes untagged from both shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Journal {
    /// Bare journal name.
    Name(String),

    /// Structured journal object.
    Structured(JournalInfo),
}

impl Journal {
    /// The journal name, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Self::Name(name) => name.as_str(),
            Self::Structured(info) => info.name.as_deref()?,
        };
        if name.is_empty() { None } else { Some(name) }
    }
}

/// Structured journal object as sent by the search service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalInfo {
    /// Journal name.
    #[serde(default)]
    pub name: Option<String>,

    /// Volume identifier.
    #[serde(default)]
    pub volume: Option<String>,

    /// Page range.
    #[serde(default)]
    pub pages: Option<String>,
}

/// Search result page wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching papers.
    #[serde(default)]
    pub total: i64,

    /// Current offset in the result set.
    #[serde(default)]
    pub offset: i32,

    /// Indicates if more results are available.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of papers in this page.
    #[serde(default)]
    pub data: Vec<Paper>,
}

impl SearchResult {
    /// Check if there are more results available.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paper_deserialize_minimal() {
        let paper: Paper = serde_json::from_str("{}").unwrap();
        assert!(paper.title.is_none());
        assert!(paper.authors.is_empty());
        assert_eq!(paper.title_or_default(), "Untitled");
        assert_eq!(paper.url_or_default(), "");
    }

    #[test]
    fn test_paper_deserialize_full() {
        let json = r#"{
            "title": "On Widgets",
            "year": 2021,
            "authors": [{"name": "Jane Q. Smith"}, {"name": "Bob Lee"}],
            "url": "http://x.test/1",
            "abstract": "A study of widgets.",
            "journal": "Journal of Widgets"
        }"#;

        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.title_or_default(), "On Widgets");
        assert_eq!(paper.year, Some(2021));
        assert_eq!(paper.author_names(), "Jane Q. Smith, Bob Lee");
        assert_eq!(paper.journal_name(), Some("Journal of Widgets"));
    }

    #[test]
    fn test_journal_from_object() {
        let json = r#"{"journal": {"name": "Nature", "volume": "598"}}"#;
        let paper: Paper = serde_json::from_str(json).unwrap();
        assert_eq!(paper.journal_name(), Some("Nature"));
    }

    #[test]
    fn test_journal_unusable_shapes() {
        // Absent journal.
        let paper: Paper = serde_json::from_str("{}").unwrap();
        assert_eq!(paper.journal_name(), None);

        // Empty bare name.
        let paper: Paper = serde_json::from_str(r#"{"journal": ""}"#).unwrap();
        assert_eq!(paper.journal_name(), None);

        // Object without a name.
        let paper: Paper = serde_json::from_str(r#"{"journal": {"volume": "3"}}"#).unwrap();
        assert_eq!(paper.journal_name(), None);

        // Object with an empty name.
        let paper: Paper = serde_json::from_str(r#"{"journal": {"name": ""}}"#).unwrap();
        assert_eq!(paper.journal_name(), None);
    }

    #[test]
    fn test_search_result() {
        let json = r#"{"total": 3, "offset": 0, "data": [{"title": "T"}]}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.data.len(), 1);
        assert!(!result.has_more());
    }
}
