//! Search gateway port
//!
//! Defines the interface for querying the instant-answer search service.

use async_trait::async_trait;
use deepthink_domain::{InstantAnswer, SearchQuery};
use thiserror::Error;

/// Errors that can occur while querying the search service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search failed with status {0}")]
    Status(u16),

    #[error("Search request failed: {0}")]
    Request(String),

    #[error("Failed to parse search results: {0}")]
    Decode(String),
}

/// Gateway for the instant-answer search API
///
/// One call issues exactly one upstream request. Implementations must not
/// retry or cache.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<InstantAnswer, SearchError>;
}
