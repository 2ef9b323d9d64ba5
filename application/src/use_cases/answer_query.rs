//! Answer Query use case.
//!
//! Server-side core of `POST /api/chat`: pick the latest user message, run
//! it through the search gateway, flatten the result and synthesize the
//! reply. One upstream call per request, no retry.

use crate::ports::search_gateway::{SearchError, SearchGateway};
use deepthink_domain::{
    ChatReply, ChatRequest, Locale, SearchQuery, flatten_topics, synthesize_reply,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum AnswerQueryError {
    #[error("No user message supplied")]
    NoUserMessage,

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl AnswerQueryError {
    /// Whether the caller sent an unusable conversation
    pub fn is_client_error(&self) -> bool {
        matches!(self, AnswerQueryError::NoUserMessage)
    }
}

/// Use case answering the latest user message of a conversation.
#[derive(Clone)]
pub struct AnswerQueryUseCase {
    gateway: Arc<dyn SearchGateway>,
    locale: Locale,
}

impl AnswerQueryUseCase {
    pub fn new(gateway: Arc<dyn SearchGateway>) -> Self {
        Self {
            gateway,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Answer the most recent `user` message in `request`.
    pub async fn execute(&self, request: &ChatRequest) -> Result<ChatReply, AnswerQueryError> {
        let query = request
            .latest_user_message()
            .map_err(|_| AnswerQueryError::NoUserMessage)?
            .content
            .as_str();
        info!(messages = request.messages.len(), "Answering query: {}", query);

        let answer = self.gateway.search(&SearchQuery::new(query)).await?;
        let topics = flatten_topics(&answer);
        debug!(
            related = answer.related_topics.len(),
            kept = topics.len(),
            "Flattened search results"
        );

        Ok(synthesize_reply(query, &topics, self.locale))
    }
}
