//! Output formatter trait

use deepthink_domain::{ChatReply, Message, Session};

/// Trait for rendering chat messages
pub trait OutputFormatter {
    /// Format a single message bubble
    fn format_message(&self, message: &Message) -> String;

    /// Format a reply as JSON
    fn format_json(&self, reply: &ChatReply) -> serde_json::Result<String> {
        serde_json::to_string_pretty(reply)
    }

    /// Format every message of a session, in order
    fn format_session(&self, session: &Session) -> String {
        session
            .messages()
            .iter()
            .map(|m| self.format_message(m))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
