//! Chat domain.
//!
//! - [`entities::Message`]: a single message within a conversation
//! - [`session::Session`]: the ordered, persisted conversation
//! - [`exchange::ChatRequest`] / [`exchange::ChatReply`]: the `/api/chat` wire shapes
//! - [`intro`]: fixed greeting, placeholder and fallback messages

pub mod entities;
pub mod exchange;
pub mod intro;
pub mod session;
