//! Markdown output formatting for candidate studies.

use std::borrow::Cow;

use crate::config::ABSTRACT_PREVIEW_LEN;
use crate::models::Paper;

/// Format a list of candidate studies as Markdown.
#[must_use]
pub fn format_studies_markdown(papers: &[Paper]) -> String {
    if papers.is_empty() {
        return "No studies found.".to_string();
    }

    let mut output = String::new();
    for (i, paper) in papers.iter().enumerate() {
        output.push_str(&format_study_markdown(paper, i + 1));
        output.push('\n');
    }

    output
}

/// Format a single study as Markdown.
#[must_use]
pub fn format_study_markdown(paper: &Paper, index: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "### {}. [{}]({})\n\n",
        index,
        paper.title_or_default(),
        paper.url_or_default()
    ));

    if !paper.authors.is_empty() {
        output.push_str(&format!("**Authors**: {}\n\n", paper.author_names()));
    }

    if let Some(year) = paper.year {
        output.push_str(&format!("**Year**: {year}\n\n"));
    }

    match &paper.r#abstract {
        Some(abs) => {
            let preview: Cow<'_, str> = if abs.chars().count() > ABSTRACT_PREVIEW_LEN {
                Cow::Owned(format!(
                    "{}...",
                    abs.chars().take(ABSTRACT_PREVIEW_LEN).collect::<String>()
                ))
            } else {
                Cow::Borrowed(abs)
            };
            output.push_str(&format!("{preview}\n"));
        }
        None => output.push_str("No abstract available.\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;

    #[test]
    fn test_empty_list() {
        assert_eq!(format_studies_markdown(&[]), "No studies found.");
    }

    #[test]
    fn test_study_basics() {
        let paper = Paper {
            title: Some("On Widgets".to_string()),
            year: Some(2021),
            authors: vec![Author::new("Jane Smith")],
            url: Some("http://x.test/1".to_string()),
            ..Default::default()
        };

        let output = format_study_markdown(&paper, 1);
        assert!(output.contains("### 1. [On Widgets](http://x.test/1)"));
        assert!(output.contains("**Authors**: Jane Smith"));
        assert!(output.contains("**Year**: 2021"));
        assert!(output.contains("No abstract available."));
    }

    #[test]
    fn test_abstract_truncated() {
        let paper = Paper { r#abstract: Some("x".repeat(400)), ..Default::default() };
        let output = format_study_markdown(&paper, 1);
        assert!(output.contains(&format!("{}...", "x".repeat(ABSTRACT_PREVIEW_LEN))));
        assert!(!output.contains(&"x".repeat(ABSTRACT_PREVIEW_LEN + 1)));
    }

    #[test]
    fn test_short_abstract_untouched() {
        let paper = Paper { r#abstract: Some("Short.".to_string()), ..Default::default() };
        let output = format_study_markdown(&paper, 1);
        assert!(output.contains("Short.\n"));
        assert!(!output.contains("Short...."));
    }
}
