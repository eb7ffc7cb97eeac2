// Conversation transcript for a single session

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered transcript; lives only as long as the session
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user message to the transcript
    pub fn append_user(&mut self, text: impl Into<String>) {
        self.push(Role::User, text.into());
    }

    /// Add an assistant message to the transcript
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.push(Role::Assistant, text.into());
    }

    fn push(&mut self, role: Role, text: String) {
        self.turns.push(Turn {
            role,
            text,
            timestamp: Utc::now(),
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Clear transcript (start fresh)
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of user messages
    pub fn user_message_count(&self) -> usize {
        self.turns.iter().filter(|t| t.role == Role::User).count()
    }

    pub fn message_count(&self) -> usize {
        self.turns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_creation() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.message_count(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut transcript = Transcript::new();

        transcript.append_user("Hello");
        transcript.append_assistant("Hi there!");
        transcript.append_user("Hello");

        let turns = transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].text, "Hi there!");
        assert_eq!(turns[2].text, "Hello");
        assert_eq!(transcript.user_message_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new();
        transcript.append_user("Hello");
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
