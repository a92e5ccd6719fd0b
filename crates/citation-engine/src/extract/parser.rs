//! Anchor-by-anchor parser for a single numbered reference entry.
//!
//! Instead of one catch-all pattern, the entry is tokenized on the
//! template's literal anchors and each segment is validated independently,
//! so a rejection names the anchor that failed.

use std::sync::LazyLock;

use regex::Regex;

use crate::citation::compose_reference;
use crate::config::template;

/// Characters permitted in the author-list segment: letters, whitespace,
/// periods, commas, ampersands, apostrophes, and hyphen/dash variants.
static AUTHOR_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s.,&'—–-]+$").expect("author segment pattern"));

/// Segments captured from one numbered entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceParts {
    /// Author-list segment, trimmed.
    pub authors: String,

    /// 4-digit year token.
    pub year: String,

    /// Title segment, trimmed; contains no period.
    pub title: String,

    /// Journal/source segment, trimmed, one trailing comma stripped.
    pub journal: String,

    /// URL token.
    pub url: String,
}

impl ReferenceParts {
    /// Reconstruct the canonical full-reference string.
    ///
    /// Always emits the `Retrieved from` anchor, even when the source line
    /// said `Available from`.
    #[must_use]
    pub fn canonical(&self) -> String {
        compose_reference(&self.authors, &self.year, &self.title, &self.journal, &self.url)
    }
}

/// Which template anchor failed to match.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No `<digits>.` entry number at the candidate position.
    #[error("no numbered-entry prefix at candidate position")]
    EntryNumber,

    /// Author segment empty or containing characters outside its charset.
    #[error("author segment missing or contains disallowed characters")]
    AuthorSegment,

    /// No parenthesized 4-digit year.
    #[error("expected a parenthesized 4-digit year")]
    Year,

    /// The year's closing parenthesis was not followed directly by a period.
    #[error("expected '.' immediately after the year")]
    YearPeriod,

    /// Title segment empty or missing its terminating period.
    #[error("title segment missing or unterminated")]
    Title,

    /// Journal segment empty or containing a comma.
    #[error("journal segment missing or contains a comma")]
    Journal,

    /// The retrieval anchor does not sit directly before the URL.
    #[error("missing 'Retrieved from' anchor before the URL")]
    RetrievalAnchor,

    /// No `http(s)://` URL token.
    #[error("missing http(s) URL token")]
    Url,
}

/// Attempt to parse a numbered entry starting at byte offset `start`.
///
/// `start` must sit on an ASCII digit. On success returns the captured
/// segments and the byte offset just past the URL token, where scanning may
/// resume.
pub fn parse_at(line: &str, start: usize) -> Result<(ReferenceParts, usize), ParseError> {
    let rest = &line[start..];
    let bytes = rest.as_bytes();

    // "<digits>." entry number.
    let mut pos = 0;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    if pos == 0 || bytes.get(pos) != Some(&b'.') {
        return Err(ParseError::EntryNumber);
    }
    pos += 1;

    // Author segment: everything up to the year's opening parenthesis.
    let after_number = &rest[pos..];
    let open = after_number.find('(').ok_or(ParseError::Year)?;
    let author_span = &after_number[..open];
    if author_span.is_empty() || !AUTHOR_SEGMENT.is_match(author_span) {
        return Err(ParseError::AuthorSegment);
    }
    let authors = author_span.trim();

    // "(dddd)" with optional inner padding.
    let mut cur = pos + open + 1;
    while bytes.get(cur).is_some_and(u8::is_ascii_whitespace) {
        cur += 1;
    }
    let year_begin = cur;
    while bytes.get(cur).is_some_and(u8::is_ascii_digit) {
        cur += 1;
    }
    if cur - year_begin != 4 {
        return Err(ParseError::Year);
    }
    let year = &rest[year_begin..cur];
    while bytes.get(cur).is_some_and(u8::is_ascii_whitespace) {
        cur += 1;
    }
    if bytes.get(cur) != Some(&b')') {
        return Err(ParseError::Year);
    }
    cur += 1;

    // Period directly after the closing parenthesis.
    if bytes.get(cur) != Some(&b'.') {
        return Err(ParseError::YearPeriod);
    }
    cur += 1;

    // Title runs to the next period and may not contain one itself; a title
    // with an internal period therefore ends early and pushes the remainder
    // into the journal segment.
    let after_year = &rest[cur..];
    let title_end = after_year.find('.').ok_or(ParseError::Title)?;
    let title = after_year[..title_end].trim();
    if title.is_empty() {
        return Err(ParseError::Title);
    }
    cur += title_end + 1;

    // Locate the URL token, then require the retrieval anchor directly
    // before it; the journal segment is whatever sits in between.
    let tail = &rest[cur..];
    let url_rel = template::URL_SCHEMES
        .iter()
        .filter_map(|scheme| tail.find(scheme))
        .min()
        .ok_or(ParseError::Url)?;
    let middle = tail[..url_rel].trim_end();
    let journal_span = middle
        .strip_suffix(template::RETRIEVED_FROM)
        .or_else(|| middle.strip_suffix(template::AVAILABLE_FROM))
        .ok_or(ParseError::RetrievalAnchor)?;

    let mut journal = journal_span.trim();
    if let Some(stripped) = journal.strip_suffix(',') {
        journal = stripped.trim_end();
    }
    if journal.is_empty() || journal.contains(',') {
        return Err(ParseError::Journal);
    }

    // URL token runs to the next whitespace or end of line.
    let url_token = &tail[url_rel..];
    let url_len = url_token.find(char::is_whitespace).unwrap_or(url_token.len());
    let url = &url_token[..url_len];
    let scheme_len = if url.starts_with("https://") { 8 } else { 7 };
    if url.len() <= scheme_len {
        return Err(ParseError::Url);
    }

    let parts = ReferenceParts {
        authors: authors.to_string(),
        year: year.to_string(),
        title: title.to_string(),
        journal: journal.to_string(),
        url: url.to_string(),
    };
    Ok((parts, start + cur + url_rel + url_len))
}
