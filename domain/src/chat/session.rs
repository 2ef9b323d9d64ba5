//! Chat session: the ordered conversation persisted between runs.

use super::entities::{Message, Role, WireMessage};
use super::intro::intro_message;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// The full ordered conversation (Entity)
///
/// List order is conversation order. There is no deduplication and no size
/// bound. Serializes verbatim as `{"messages": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    messages: Vec<Message>,
}

impl Session {
    /// Fresh session seeded with the intro greeting
    pub fn new(locale: Locale) -> Self {
        Self {
            messages: vec![intro_message(locale)],
        }
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
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

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Drop the message with `id` and append `message` at the end.
    ///
    /// Returns `false` when no message had that id; `message` is appended
    /// either way.
    pub fn replace(&mut self, id: &str, message: Message) -> bool {
        let removed = self.remove(id);
        self.messages.push(message);
        removed
    }

    /// Remove every message with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    /// Reset to a fresh intro-only session
    pub fn clear(&mut self, locale: Locale) {
        self.messages = vec![intro_message(locale)];
    }

    /// The conversation as posted to the server.
    ///
    /// Thinking placeholders are local UI state and are never sent.
    pub fn wire_messages(&self) -> Vec<WireMessage> {
        self.messages
            .iter()
            .filter(|m| m.role != Role::Thinking)
            .map(Message::to_wire)
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::entities::Source;
    use crate::chat::intro::INTRO_MESSAGE_ID;

    #[test]
    fn test_new_session_starts_with_intro() {
        let session = Session::new(Locale::En);
        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].id, INTRO_MESSAGE_ID);
    }

    #[test]
    fn test_replace_moves_message_to_end() {
        let mut session = Session::from_messages(vec![]);
        session.push(Message::user("q").with_id("u1"));
        session.push(Message::thinking("...").with_id("t1"));

        let replaced = session.replace("t1", Message::assistant("a").with_id("a1"));
        assert!(replaced);

        let ids: Vec<_> = session.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["u1", "a1"]);
    }

    #[test]
    fn test_replace_missing_id_still_appends() {
        let mut session = Session::from_messages(vec![]);
        assert!(!session.replace("nope", Message::assistant("a")));
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_wire_messages_skip_thinking() {
        let mut session = Session::new(Locale::En);
        session.push(Message::user("question"));
        session.push(Message::thinking("..."));

        let wire = session.wire_messages();
        assert_eq!(wire.len(), 2);
        assert_eq!(wire[0].role, Role::Assistant);
        assert_eq!(wire[1], WireMessage::user("question"));
    }

    #[test]
    fn test_clear_resets_to_intro() {
        let mut session = Session::new(Locale::En);
        session.push(Message::user("a"));
        session.push(Message::assistant("b"));
        session.clear(Locale::En);
        assert_eq!(session, Session::new(Locale::En));
    }

    #[test]
    fn test_serialized_shape_and_round_trip() {
        let mut session = Session::new(Locale::En);
        session.push(Message::user("weather").with_id("u1"));
        session.push(
            Message::assistant("Weather is...")
                .with_id("a1")
                .with_thoughts(vec!["one".to_string()])
                .with_sources(vec![Source {
                    title: "Weather".to_string(),
                    url: "https://x".to_string(),
                    snippet: "Weather is...".to_string(),
                }]),
        );

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["messages"].as_array().unwrap().len(), 3);
        assert_eq!(json["messages"][1]["role"], "user");

        let restored: Session = serde_json::from_value(json).unwrap();
        assert_eq!(restored, session);
    }
}
