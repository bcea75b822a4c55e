//! Chat message and session types.
//!
//! A `ChatSession` is the explicit owner of one interactive conversation:
//! user asks → records are formatted → provider answers → both turns are
//! appended here. Nothing in a session is ever persisted.

use serde::{Deserialize, Serialize};

use crate::credential::SessionCredential;

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The patient using the companion
    User,
    /// The AI assistant
    Assistant,
}

impl Role {
    /// Transcript label used in prompts ("User" / "Assistant").
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Assistant => "Assistant",
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One interactive session: an ordered transcript plus a session-scoped
/// credential slot.
///
/// The session is the single source of truth for transcript ordering.
/// Answering a query takes `&mut ChatSession`, so a second query cannot be
/// dispatched on the same session while one is outstanding.
#[derive(Debug, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    credential: SessionCredential,
}

impl ChatSession {
    /// Create a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new empty session that shares an existing credential slot.
    ///
    /// Used when the user ends the current conversation but keeps working:
    /// the transcript starts over, and a key typed earlier stays in effect.
    pub fn with_credential(credential: SessionCredential) -> Self {
        Self {
            messages: Vec::new(),
            credential,
        }
    }

    /// The transcript, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append a message to the transcript.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Handle to this session's credential slot.
    pub fn credential(&self) -> &SessionCredential {
        &self.credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::Credential;

    #[test]
    fn create_user_message() {
        let msg = ChatMessage::user("Can I take ibuprofen?");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Can I take ibuprofen?");
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::assistant("hi")).unwrap();
        assert!(json.contains(r#""role":"assistant""#));
    }

    #[test]
    fn session_keeps_insertion_order() {
        let mut session = ChatSession::new();
        session.push(ChatMessage::user("first"));
        session.push(ChatMessage::assistant("second"));
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].content, "first");
        assert_eq!(session.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn new_session_with_shared_credential_starts_empty() {
        let mut old = ChatSession::new();
        old.push(ChatMessage::user("hello"));

        let fresh = ChatSession::with_credential(old.credential().clone());
        assert!(fresh.is_empty());
        assert_eq!(old.len(), 1);

        // Both handles point at one slot.
        old.credential().set(Credential::new("tok").unwrap());
        assert_eq!(fresh.credential().get().unwrap().expose(), "tok");
    }
}
