//! Engine constants and the contract with the external search collaborator.

/// Paper field sets the search collaborator must request.
pub mod fields {
    /// Fields a record needs for full-reference formatting and study display.
    pub const SEARCH: &[&str] = &["title", "authors", "year", "url", "abstract", "journal"];
}

/// Literals of the canonical reference template.
///
/// The extractor re-anchors on these exact strings, so they must match the
/// formatter's output byte for byte.
pub mod template {
    /// Substitute journal segment when a record carries no usable journal name.
    pub const JOURNAL_FALLBACK: &str = "Journal Name";

    /// Anchor emitted before the URL in every full reference.
    pub const RETRIEVED_FROM: &str = "Retrieved from";

    /// Alternate anchor accepted during extraction, normalized to
    /// [`RETRIEVED_FROM`] on output.
    pub const AVAILABLE_FROM: &str = "Available from";

    /// Schemes a reference URL token may start with.
    pub const URL_SCHEMES: &[&str] = &["http://", "https://"];
}

/// Default number of papers requested per topic search.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// Abstract preview length (in characters) used in study summaries.
pub const ABSTRACT_PREVIEW_LEN: usize = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_fields() {
        assert!(fields::SEARCH.contains(&"journal"));
        assert!(fields::SEARCH.contains(&"url"));
    }

    #[test]
    fn test_template_literals() {
        assert_eq!(template::RETRIEVED_FROM, "Retrieved from");
        assert_eq!(template::JOURNAL_FALLBACK, "Journal Name");
    }
}
