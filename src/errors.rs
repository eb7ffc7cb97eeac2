// Error types and user-friendly error messages
//
// `MindwellError` is the library error. The helpers at the bottom turn
// startup failures into actionable messages for the terminal.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindwellError {
    /// Questionnaire or knowledge base failed validation
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Answer value is not one of the configured scale points
    #[error("Invalid answer {value}: expected one of {allowed:?}")]
    InvalidAnswer { value: u32, allowed: Vec<u32> },

    #[error("Assessment is already complete")]
    AssessmentComplete,

    #[error("Assessment is still in progress")]
    AssessmentInProgress,

    /// The user ended the chat with an exit command
    #[error("Session has ended")]
    SessionEnded,

    #[error("Sentiment analysis failed: {0}")]
    Sentiment(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MindwellError>;

/// Wrap an error with user-friendly context
pub trait UserFriendlyError {
    /// Add user-friendly context to this error
    fn user_context(self, message: &str) -> Self;

    /// Add user-friendly context with a suggestion
    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self;
}

impl<T> UserFriendlyError for anyhow::Result<T> {
    fn user_context(self, message: &str) -> Self {
        anyhow::Context::with_context(self, || message.to_string())
    }

    fn user_context_with_suggestion(self, problem: &str, suggestion: &str) -> Self {
        anyhow::Context::with_context(self, || wrap_error_with_suggestion(problem, suggestion))
    }
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.mindwell/config.toml\x1b[0m\n\n\
        2. Remove the file to fall back to defaults:\n\
           \x1b[36mmv ~/.mindwell/config.toml ~/.mindwell/config.toml.backup\x1b[0m\n\n\
        3. Common mistakes:\n\
           • Missing quotes around paths\n\
           • Seed given as a string instead of a number",
        error
    )
}

/// Format a questionnaire validation error with helpful suggestions
pub fn questionnaire_invalid_error(path: &str, error: &str) -> String {
    format!(
        "Questionnaire at {} is invalid\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Interpretation ranges leave a gap or overlap\n\
        • A range key is not written as \"low-high\"\n\
        • A scale value is outside 0-3\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Validate the file:\n\
           \x1b[36mmindwell validate {}\x1b[0m\n\n\
        2. Remove the file to use the built-in PHQ-9 set",
        path, error, path
    )
}

/// Format a knowledge base load error with helpful suggestions
pub fn knowledge_base_error(path: &str, error: &str) -> String {
    format!(
        "Failed to load response knowledge base from {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check that every intent has keywords and responses\n\
        2. Drop the --knowledge flag to use the built-in responses",
        path, error
    )
}

/// Wrap a generic error with suggestions
pub fn wrap_error_with_suggestion(error: impl fmt::Display, suggestion: &str) -> String {
    format!(
        "{}\n\n\
        \x1b[1;33mSuggestion:\x1b[0m {}",
        error, suggestion
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_lists_allowed_values() {
        let err = MindwellError::InvalidAnswer {
            value: 7,
            allowed: vec![0, 1, 2, 3],
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("[0, 1, 2, 3]"));
    }

    #[test]
    fn test_questionnaire_error_suggests_validate() {
        let msg = questionnaire_invalid_error("phq9.json", "gap at 5");
        assert!(msg.contains("mindwell validate phq9.json"));
        assert!(msg.contains("gap at 5"));
    }

    #[test]
    fn test_user_context_with_suggestion() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("boom"));
        let err = result
            .user_context_with_suggestion("Could not start", "check the config")
            .unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("Could not start"));
        assert!(msg.contains("check the config"));
    }

    #[test]
    fn test_user_context_keeps_source() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("stdin closed"));
        let err = result.user_context("Chat session stopped").unwrap_err();
        assert_eq!(err.to_string(), "Chat session stopped");
        assert!(format!("{:#}", err).contains("stdin closed"));
    }
}
