//! Full-reference formatting and the canonical template.

use crate::config::template;
use crate::models::Paper;

use super::authors::format_in_text_authors;

/// Assemble the canonical full-reference template from its five segments.
///
/// Both the formatter and the extractor go through this function, so a
/// reference embedded in generated text reconstructs to the identical string.
/// No escaping is performed: a title or journal containing ". " is visually
/// ambiguous with the template's own delimiters, and such a reference may not
/// survive re-extraction in its original segmentation.
#[must_use]
pub fn compose_reference(
    authors: &str,
    year: &str,
    title: &str,
    journal: &str,
    url: &str,
) -> String {
    format!(
        "{authors} ({year}). {title}. {journal}, {anchor} {url}",
        anchor = template::RETRIEVED_FROM
    )
}

/// Render a paper record as an APA-style full reference.
///
/// The author segment uses full names, comma-joined, in record order (the
/// in-text surname rules do not apply here). A record without a usable
/// journal name gets the literal fallback. A record without a year renders
/// the year segment as `0`, which is not a 4-digit token and therefore will
/// not re-extract.
#[must_use]
pub fn format_full_reference(paper: &Paper) -> String {
    let authors = paper.author_names();
    let year = paper.year.unwrap_or(0).to_string();
    let journal = paper.journal_name().unwrap_or(template::JOURNAL_FALLBACK);
    compose_reference(&authors, &year, paper.title_or_default(), journal, paper.url_or_default())
}

/// Build the in-text citation example for a set of papers.
///
/// Joins per-paper `"<AuthorsShort> (<Year>)"` fragments with `" and "`.
/// Only ever embedded as example usage inside a generation request; never
/// persisted as a reference.
#[must_use]
pub fn format_in_text_example(papers: &[Paper]) -> String {
    papers
        .iter()
        .map(|p| format!("{} ({})", format_in_text_authors(&p.authors), p.year.unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(" and ")
}
