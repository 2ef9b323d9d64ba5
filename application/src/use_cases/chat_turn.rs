//! Chat Turn use case.
//!
//! Client-side state machine for one exchange with the chat server:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──▶ AwaitingResponse ──reply/failure──▶ Idle
//! ```
//!
//! [`ChatController`] owns the [`Session`] explicitly. Every transition that
//! changes the session is followed by a save through the [`SessionStore`].

use crate::ports::chat_transport::{ChatTransport, TransportError};
use crate::ports::session_store::SessionStore;
use crate::ports::turn_observer::{ChatState, TurnObserver};
use deepthink_domain::{
    ChatRequest, Locale, Message, Session, fallback_message, thinking_placeholder,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that prevent a turn from starting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatTurnError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("A reply is already in flight")]
    Busy,
}

/// How a turn ended
#[derive(Debug, Clone)]
pub enum TurnOutcome {
    /// The server replied; the assistant message was appended
    Answered(Message),
    /// The call failed; the fixed fallback message was appended
    Fallback {
        message: Message,
        error: TransportError,
    },
}

impl TurnOutcome {
    /// The assistant message appended by this turn
    pub fn message(&self) -> &Message {
        match self {
            TurnOutcome::Answered(message) => message,
            TurnOutcome::Fallback { message, .. } => message,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TurnOutcome::Fallback { .. })
    }
}

/// Drives chat turns against a [`ChatTransport`] and persists the session.
///
/// `submit` takes `&mut self`, so a controller has at most one turn in
/// flight. Dropping a `submit` future before it finishes leaves the
/// controller busy, with the placeholder in the session; further submits
/// fail with `Busy` until [`clear`](Self::clear).
pub struct ChatController {
    session: Session,
    state: ChatState,
    locale: Locale,
    transport: Arc<dyn ChatTransport>,
    store: Arc<dyn SessionStore>,
}

impl ChatController {
    pub fn new(transport: Arc<dyn ChatTransport>, store: Arc<dyn SessionStore>) -> Self {
        Self::with_locale(transport, store, Locale::default())
    }

    pub fn with_locale(
        transport: Arc<dyn ChatTransport>,
        store: Arc<dyn SessionStore>,
        locale: Locale,
    ) -> Self {
        Self {
            session: Session::new(locale),
            state: ChatState::Idle,
            locale,
            transport,
            store,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Load the stored session, once, at startup.
    ///
    /// Keeps the fresh intro session when nothing is stored, the stored
    /// session is empty, or the store cannot be read. Returns whether a
    /// stored session was adopted.
    pub fn restore(&mut self) -> bool {
        match self.store.load() {
            Ok(Some(session)) if !session.is_empty() => {
                info!("Restored chat history ({} messages)", session.len());
                self.session = session;
                true
            }
            Ok(_) => false,
            Err(e) => {
                warn!("Failed to restore chat history: {}", e);
                false
            }
        }
    }

    /// Reset to the intro session, back to `Idle`, and persist it
    pub fn clear(&mut self) {
        self.session.clear(self.locale);
        self.state = ChatState::Idle;
        self.persist();
    }

    /// Run one turn: record the prompt, ask the server, record the reply.
    ///
    /// Transport failures do not surface as errors; they end the turn with
    /// the fixed fallback message.
    pub async fn submit(
        &mut self,
        input: &str,
        observer: &dyn TurnObserver,
    ) -> Result<TurnOutcome, ChatTurnError> {
        let prompt = input.trim();
        if prompt.is_empty() {
            return Err(ChatTurnError::EmptyPrompt);
        }
        if self.is_busy() {
            return Err(ChatTurnError::Busy);
        }

        self.transition(ChatState::Submitting, observer);

        let user_message = Message::user(prompt);
        self.push(user_message, observer);
        // Snapshot before the placeholder goes in
        let request = ChatRequest::new(self.session.wire_messages());

        let placeholder = Message::thinking(thinking_placeholder(self.locale));
        let placeholder_id = placeholder.id.clone();
        self.push(placeholder, observer);
        self.persist();

        self.transition(ChatState::AwaitingResponse, observer);
        debug!("Posting {} messages", request.messages.len());

        let outcome = match self.transport.send(&request).await {
            Ok(reply) => TurnOutcome::Answered(reply.into_message()),
            Err(error) => {
                warn!("Chat request failed: {}", error);
                TurnOutcome::Fallback {
                    message: fallback_message(self.locale),
                    error,
                }
            }
        };

        self.session
            .replace(&placeholder_id, outcome.message().clone());
        observer.on_message(outcome.message());
        self.persist();

        self.transition(ChatState::Idle, observer);
        Ok(outcome)
    }

    fn push(&mut self, message: Message, observer: &dyn TurnObserver) {
        observer.on_message(&message);
        self.session.push(message);
    }

    fn transition(&mut self, state: ChatState, observer: &dyn TurnObserver) {
        debug!("Chat state: {} -> {}", self.state, state);
        self.state = state;
        observer.on_state_change(state);
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.session) {
            warn!("Failed to persist chat history: {}", e);
        }
    }
}
