//! In-text author formatting (APA author-count rules).

use crate::models::Author;

/// Reduce an author list to the in-text citation fragment.
///
/// APA rules by author count:
/// - empty list: `"Anonymous"`
/// - one author: surname alone
/// - two authors: `"A & B"`
/// - three or more: `"A et al."` (only the first surname is kept)
#[must_use]
pub fn format_in_text_authors(authors: &[Author]) -> String {
    if authors.is_empty() {
        return "Anonymous".to_string();
    }

    let surnames: Vec<&str> = authors.iter().map(Author::surname).collect();
    match surnames.as_slice() {
        [] => "Anonymous".to_string(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} & {second}"),
        [first, ..] => format!("{first} et al."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authors(names: &[&str]) -> Vec<Author> {
        names.iter().map(|n| Author::new(*n)).collect()
    }

    #[test]
    fn test_empty_list_is_anonymous() {
        assert_eq!(format_in_text_authors(&[]), "Anonymous");
    }

    #[test]
    fn test_single_author_surname() {
        assert_eq!(format_in_text_authors(&authors(&["Jane Q. Smith"])), "Smith");
    }

    #[test]
    fn test_two_authors_ampersand() {
        assert_eq!(
            format_in_text_authors(&authors(&["Jane Smith", "Bob Lee"])),
            "Smith & Lee"
        );
    }

    #[test]
    fn test_three_or_more_et_al() {
        assert_eq!(
            format_in_text_authors(&authors(&["Jane Smith", "Bob Lee", "Ann Wu"])),
            "Smith et al."
        );
        assert_eq!(
            format_in_text_authors(&authors(&["A One", "B Two", "C Three", "D Four"])),
            "One et al."
        );
    }

    #[test]
    fn test_multi_word_surname_uses_last_token() {
        assert_eq!(
            format_in_text_authors(&authors(&["Ludwig van Beethoven"])),
            "Beethoven"
        );
    }
}
