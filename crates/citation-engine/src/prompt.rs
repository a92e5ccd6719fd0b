//! Prompt builders for the external text-generation collaborator.
//!
//! Pure string construction; sending the prompt and handling the response
//! are the caller's concern. The note prompt instructs the generator to echo
//! each full reference verbatim on its own numbered line, which is what makes
//! later re-extraction from the accepted note text possible.

use crate::citation::{format_full_reference, format_in_text_example};
use crate::error::{EngineError, EngineResult};
use crate::models::Paper;
use crate::notes::NoteStore;

/// Build the prompt that asks the generator to draft a note for a topic.
///
/// Embeds every study as `"<i>. <full reference>"` on its own line and shows
/// the in-text citation example sentence pattern.
pub fn note_prompt(topic: &str, papers: &[Paper]) -> EngineResult<String> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(EngineError::validation("topic", "cannot be empty"));
    }

    let formatted_studies =
        papers.iter().map(format_full_reference).collect::<Vec<_>>().join("\n");
    let numbered_studies = papers
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, format_full_reference(p)))
        .collect::<Vec<_>>()
        .join("\n");
    let in_text_example = format_in_text_example(papers);

    Ok(format!(
        "You are an academic writing assistant.\n\n\
         Here is a topic: \"{topic}\"\n\
         And these are real academic studies related to it:\n\
         {formatted_studies}\n\n\
         Write a note that includes:\n\
         Topic: {topic}\n\
         Study: (LIST THESE STUDIES EXACTLY AS PROVIDED BELOW, DO NOT REPHRASE OR ALTER, \
         ENSURE EACH IS NUMBERED AND ON A NEW LINE)\n\
         {numbered_studies}\n\
         Suggested sentence: [A sample sentence showing how these studies could be used in \
         academic writing, using in-text citations like: \"{in_text_example}\". IMPORTANT: \
         Ensure all in-text citations follow APA format: \"Lastname (Year)\" for one author, \
         \"Lastname & Lastname (Year)\" for two authors, \"Lastname et al. (Year)\" for three \
         or more authors. ALWAYS include the year in parentheses after the authors for in-text \
         citations.]\n\n\
         Do not invent any sources. Only use what is listed."
    ))
}

/// Build the prompt that asks the generator to write the "Previous Studies
/// and Related Topics" section from the introduction and collected notes.
pub fn section_prompt(introduction: &str, notes: &NoteStore) -> EngineResult<String> {
    let introduction = introduction.trim();
    if introduction.is_empty() {
        return Err(EngineError::validation("introduction", "cannot be empty"));
    }

    let joined_notes = notes.iter_text().collect::<Vec<_>>().join("\n\n");

    Ok(format!(
        "You are an academic writing assistant.\n\n\
         Write a cohesive academic section titled \"Previous Studies and Related Topics\" for a \
         student's thesis.\n\n\
         Start from the student's research theme and introduction:\n\
         \"{introduction}\"\n\n\
         Then, integrate the following real research notes collected by the student.\n\n\
         Each note includes:\n\
         - A topic\n\
         - A real study (APA format)\n\
         - A suggestion for how the study might support the paper\n\n\
         Your task:\n\
         1. Write as if you are the student.\n\
         2. Use formal academic style and structure.\n\
         3. Integrate the studies naturally, not just list them.\n\
         4. Show how they support the purpose of the current study.\n\
         5. Do not invent any additional sources or assumptions.\n\n\
         Here are the notes:\n\
         {joined_notes}\n\n\
         Write the entire section in a unified paragraph flow."
    ))
}

/// Build the prompt that asks the generator to analyze a thesis
/// introduction and suggest related topics.
pub fn analysis_prompt(introduction: &str) -> EngineResult<String> {
    let introduction = introduction.trim();
    if introduction.is_empty() {
        return Err(EngineError::validation("introduction", "cannot be empty"));
    }

    Ok(format!(
        "Please analyze the following thesis introduction for:\n\
         1. Clarity and coherence\n\
         2. Strength of academic structure\n\
         3. Suggestions for improvement\n\n\
         Then, suggest related topics and subtopics in an itemized format like:\n\
         1. [Topic Title]\n\
         \x20  - Subtopic A\n\
         \x20  - Subtopic B\n\
         2. [Another Topic Title]\n\
         \x20  - Subtopic A\n\
         \x20  - Subtopic B\n\n\
         Here is the introduction:\n\
         \"{introduction}\""
    ))
}
