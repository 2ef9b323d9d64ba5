//! Application layer for deepthink
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_transport::{ChatTransport, TransportError},
    search_gateway::{SearchError, SearchGateway},
    session_store::{NoSessionStore, SessionStore, StoreError},
    turn_observer::{ChatState, NoTurnObserver, TurnObserver},
};
pub use use_cases::answer_query::{AnswerQueryError, AnswerQueryUseCase};
pub use use_cases::chat_turn::{ChatController, ChatTurnError, TurnOutcome};
