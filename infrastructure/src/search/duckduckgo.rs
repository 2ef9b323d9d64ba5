//! DuckDuckGo Instant Answer client.
//!
//! Implements [`SearchGateway`] over the
//! [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/), which
//! requires no API key. One `search` call is one GET request: no retry, no
//! caching, and no timeout unless one is configured.

use crate::config::{DEFAULT_USER_AGENT, FileSearchConfig};
use async_trait::async_trait;
use deepthink_application::{SearchError, SearchGateway};
use deepthink_domain::{InstantAnswer, SearchQuery};
use reqwest::header::USER_AGENT;
use tracing::debug;

/// Instant-answer client backed by a shared `reqwest::Client`
pub struct DuckDuckGoClient {
    client: reqwest::Client,
    endpoint: String,
    user_agent: String,
}

impl DuckDuckGoClient {
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Build from the `[search]` config section
    pub fn from_config(config: &FileSearchConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self::with_client(builder.build()?, config.endpoint.clone())
            .with_user_agent(config.user_agent.clone()))
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchGateway for DuckDuckGoClient {
    async fn search(&self, query: &SearchQuery) -> Result<InstantAnswer, SearchError> {
        debug!("Querying {} for: {}", self.endpoint, query.text());

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.params())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<InstantAnswer>()
            .await
            .map_err(|e| SearchError::Decode(e.to_string()))
    }
}
