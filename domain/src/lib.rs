//! Domain layer for deepthink
//!
//! This crate contains the core entities, value objects and pure functions.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Session
//!
//! The ordered list of [`Message`]s exchanged with the assistant. It is the
//! only state the chat client keeps between runs.
//!
//! ## Instant answer
//!
//! The upstream search response ([`InstantAnswer`]). Its related topics are
//! either leaves or one-level groups ([`RelatedTopic`]) and are flattened
//! into at most [`MAX_SOURCES`] [`Topic`]s.
//!
//! ## Synthesis
//!
//! A templated reply, [`CannedThoughts`] and display [`Source`]s built from
//! the flattened topics. The thoughts are a fixed narrative, not reasoning.

pub mod chat;
pub mod core;
pub mod locale;
pub mod search;
pub mod synthesis;
pub mod util;

// Re-export commonly used types
pub use chat::{
    entities::{Message, Role, Source, WireMessage},
    exchange::{ChatReply, ChatRequest},
    intro::{INTRO_MESSAGE_ID, fallback_message, intro_message, thinking_placeholder},
    session::Session,
};
pub use core::error::DomainError;
pub use locale::Locale;
pub use search::{
    entities::{InstantAnswer, RelatedTopic, Topic},
    flatten::{MAX_SOURCES, flatten_topics},
    query::SearchQuery,
};
pub use synthesis::{CannedThoughts, clean_text, craft_answer, synthesize_reply, to_sources};
