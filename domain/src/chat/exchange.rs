//! Request/response shapes exchanged between the chat client and server.

use super::entities::{Message, Role, Source, WireMessage};
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(deserialize_with = "known_roles")]
    pub messages: Vec<WireMessage>,
}

/// Incoming entry before its role is checked
#[derive(Deserialize)]
struct IncomingMessage {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Drop entries whose role is missing or unknown; missing content reads as empty.
fn known_roles<'de, D>(deserializer: D) -> Result<Vec<WireMessage>, D::Error>
where
    D: Deserializer<'de>,
{
    let incoming = Vec::<IncomingMessage>::deserialize(deserializer)?;
    Ok(incoming
        .into_iter()
        .filter_map(|m| {
            let role = Role::from_name(m.role.as_deref()?)?;
            Some(WireMessage::new(role, m.content.unwrap_or_default()))
        })
        .collect())
}

impl ChatRequest {
    pub fn new(messages: Vec<WireMessage>) -> Self {
        Self { messages }
    }

    /// The most recent message with role `user`
    pub fn latest_user_message(&self) -> Result<&WireMessage, DomainError> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .ok_or(DomainError::NoUserMessage)
    }
}

/// Successful body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    pub thoughts: Vec<String>,
    pub sources: Vec<Source>,
}

impl ChatReply {
    /// Turn the reply into the assistant message the client appends
    pub fn into_message(self) -> Message {
        Message::assistant(self.reply)
            .with_sources(self.sources)
            .with_thoughts(self.thoughts)
    }
}
