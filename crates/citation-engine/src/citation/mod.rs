//! APA citation formatting.
//!
//! Two distinct author treatments exist side by side: full references use
//! full names in record order, in-text fragments reduce to surnames with the
//! APA count rules.

mod apa;
mod authors;

pub use apa::{compose_reference, format_full_reference, format_in_text_example};
pub use authors::format_in_text_authors;
