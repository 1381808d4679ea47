//! In-memory conversation transcript.
//!
//! The transcript belongs to the calling UI, not the responder: the
//! responder never reads it, and nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who said a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    /// Display label for transcript rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Assistant => "Assistant",
            Role::User => "You",
        }
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered list of messages for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript::default()
    }

    /// Transcript seeded with the assistant's opening message.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Role::Assistant, greeting);
        transcript
    }

    /// Append a message, keeping arrival order.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_seeds_first_position() {
        let transcript = Transcript::with_greeting("welcome");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
        assert_eq!(transcript.messages()[0].content, "welcome");
    }

    #[test]
    fn test_push_preserves_order_and_roles() {
        let mut transcript = Transcript::new();
        transcript.push(Role::User, "question");
        transcript.push(Role::Assistant, "answer");

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(transcript.messages()[1].content, "answer");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Assistant.label(), "Assistant");
        assert_eq!(Role::User.label(), "You");
    }
}
