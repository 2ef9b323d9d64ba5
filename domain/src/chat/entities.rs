//! Chat domain entities

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
    /// Transient placeholder shown while a reply is in flight
    Thinking,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
            Role::Thinking => "thinking",
        }
    }

    /// Parse a wire role name, `None` for names outside the four known roles
    pub fn from_name(name: &str) -> Option<Self> {
        [Role::User, Role::Assistant, Role::System, Role::Thinking]
            .into_iter()
            .find(|role| role.as_str() == name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A search result attached to an assistant reply (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A message in a conversation (Entity)
///
/// Messages are never edited in place. A changed message is a new value that
/// replaces the old one in the [`Session`](super::session::Session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<Vec<String>>,
}

impl Message {
    /// Create a message with a freshly generated id
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            sources: None,
            thoughts: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn thinking(content: impl Into<String>) -> Self {
        Self::new(Role::Thinking, content)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn with_thoughts(mut self, thoughts: Vec<String>) -> Self {
        self.thoughts = Some(thoughts);
        self
    }

    /// Strip everything except role and content for posting to the server
    pub fn to_wire(&self) -> WireMessage {
        WireMessage {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// The `{role, content}` shape carried in a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: Role,
    pub content: String,
}

impl WireMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Thinking).unwrap(), "\"thinking\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_unknown_role_rejected() {
        assert!(serde_json::from_str::<Role>("\"tool\"").is_err());
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(Role::from_name("system"), Some(Role::System));
        assert_eq!(Role::from_name("tool"), None);
        assert_eq!(Role::from_name("User"), None);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("hi");
        let b = Message::user("hi");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let message = Message::user("hello").with_id("m1");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "m1", "role": "user", "content": "hello"})
        );
    }

    #[test]
    fn test_to_wire_drops_extras() {
        let message = Message::assistant("answer")
            .with_thoughts(vec!["t".to_string()])
            .with_sources(vec![Source {
                title: "T".to_string(),
                url: "https://x".to_string(),
                snippet: "S".to_string(),
            }]);
        let wire = message.to_wire();
        assert_eq!(wire, WireMessage::assistant("answer"));
    }
}
