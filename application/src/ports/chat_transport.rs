//! Chat transport port
//!
//! Defines how the chat client reaches the `/api/chat` handler.

use async_trait::async_trait;
use deepthink_domain::{ChatReply, ChatRequest};
use thiserror::Error;

/// Errors that can occur while posting a conversation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("API error: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Client-side connection to the chat handler
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Post the conversation and wait for the reply
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError>;
}
