//! Prompt builder tests, including the round trip from prompt-embedded
//! references back through extraction.

use citation_engine::citation::format_full_reference;
use citation_engine::models::{Author, Journal, Paper};
use citation_engine::prompt::{analysis_prompt, note_prompt, section_prompt};
use citation_engine::{EngineError, NoteStore, ReferenceExtractor};

fn paper(names: &[&str], year: i32, title: &str, journal: &str, url: &str) -> Paper {
    Paper {
        title: Some(title.to_string()),
        year: Some(year),
        authors: names.iter().map(|n| Author::new(*n)).collect(),
        url: Some(url.to_string()),
        journal: Some(Journal::Name(journal.to_string())),
        ..Default::default()
    }
}

#[test]
fn test_note_prompt_embeds_numbered_references() {
    let papers = vec![
        paper(&["Jane Q. Smith"], 2021, "On Widgets", "Journal of Widgets", "http://x.test/1"),
        paper(&["Robert Lee", "Ann Wu"], 2019, "On Gadgets", "Gadgetry", "http://x.test/2"),
    ];
    let prompt = note_prompt("widget adoption", &papers).unwrap();

    for (i, p) in papers.iter().enumerate() {
        assert!(prompt.contains(&format!("{}. {}", i + 1, format_full_reference(p))));
    }
    assert!(prompt.contains("Smith (2021) and Lee & Wu (2019)"));
}

#[test]
fn test_note_prompt_studies_round_trip_through_extraction() {
    // A generator that echoes the numbered study lines verbatim produces a
    // note whose references extract back exactly.
    let papers = vec![
        paper(&["Jane Q. Smith"], 2021, "On Widgets", "Journal of Widgets", "http://x.test/1"),
        paper(&["Robert Lee", "Ann Wu"], 2019, "On Gadgets", "Gadgetry", "http://x.test/2"),
    ];
    let echoed: String = papers
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}\n", i + 1, format_full_reference(p)))
        .collect();
    let note = format!("Topic: widget adoption\nStudy:\n{echoed}Suggested sentence: see above.");

    let mut store = NoteStore::new();
    store.append(note).unwrap();
    let set = ReferenceExtractor::new().extract_from_store(&store);

    let expected: Vec<String> = papers.iter().map(format_full_reference).collect();
    assert_eq!(set.to_ordered_list(), expected);
}

#[test]
fn test_note_prompt_requires_topic() {
    assert_eq!(
        note_prompt("", &[]).unwrap_err(),
        EngineError::validation("topic", "cannot be empty")
    );
}

#[test]
fn test_section_prompt_joins_notes_in_order() {
    let mut notes = NoteStore::new();
    notes.append("first note").unwrap();
    notes.append("second note").unwrap();

    let prompt = section_prompt("Intro text.", &notes).unwrap();
    let first = prompt.find("first note").unwrap();
    let second = prompt.find("second note").unwrap();
    assert!(first < second);
}

#[test]
fn test_section_prompt_requires_introduction() {
    assert!(section_prompt("  ", &NoteStore::new()).is_err());
}

#[test]
fn test_analysis_prompt_requires_introduction() {
    assert!(analysis_prompt("An introduction.").is_ok());
    assert!(analysis_prompt("").is_err());
}
