//! Chat turn observation port
//!
//! Lets the presentation layer follow a chat turn as it moves through its
//! states, e.g. to animate a thinking indicator.

use deepthink_domain::Message;
use std::fmt;

/// State of the chat client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    /// Ready for input
    Idle,
    /// User message and placeholder are being recorded
    Submitting,
    /// Waiting for the server's reply
    AwaitingResponse,
}

impl ChatState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, ChatState::Idle)
    }
}

impl fmt::Display for ChatState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChatState::Idle => "idle",
            ChatState::Submitting => "submitting",
            ChatState::AwaitingResponse => "awaiting-response",
        };
        f.write_str(name)
    }
}

/// Callback for chat turn progress
pub trait TurnObserver: Send + Sync {
    /// Called after every state transition
    fn on_state_change(&self, state: ChatState);

    /// Called when a message is appended to the session
    fn on_message(&self, _message: &Message) {}
}

/// No-op observer
pub struct NoTurnObserver;

impl TurnObserver for NoTurnObserver {
    fn on_state_change(&self, _state: ChatState) {}
}
