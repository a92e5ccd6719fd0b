//! Error types for the citation engine.
//!
//! Uses `thiserror` for structured error handling. The engine absorbs most
//! failure modes locally (missing paper fields get fallbacks, unparsable note
//! lines are skipped, duplicate insertions are no-ops), so this enum only
//! carries the conditions a caller must react to.

/// Errors surfaced by the citation engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A note was empty after trimming and was not stored.
    #[error("note text is empty after trimming")]
    EmptyNote,

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },
}

impl EngineError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }

    /// Convert to a user-facing message for display by the UI adapter.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::EmptyNote => "No content to save as note.".to_string(),
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
        }
    }
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_user_message() {
        let err = EngineError::validation("topic", "cannot be empty");
        assert!(err.to_user_message().contains("topic"));
        assert!(err.to_user_message().contains("cannot be empty"));
    }

    #[test]
    fn test_empty_note_user_message() {
        assert_eq!(EngineError::EmptyNote.to_user_message(), "No content to save as note.");
    }
}
