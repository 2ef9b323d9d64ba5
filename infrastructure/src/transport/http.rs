//! HTTP transport to the `/api/chat` handler.

use async_trait::async_trait;
use deepthink_application::{ChatTransport, TransportError};
use deepthink_domain::{ChatReply, ChatRequest};
use tracing::debug;

/// Route of the chat handler on the server
pub const CHAT_PATH: &str = "/api/chat";

/// Posts conversations to a deepthink server over HTTP
pub struct HttpChatTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpChatTransport {
    pub fn new(server_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), server_url)
    }

    pub fn with_client(client: reqwest::Client, server_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", server_url.trim_end_matches('/'), CHAT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpChatTransport {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        debug!("POST {} ({} messages)", self.endpoint, request.messages.len());

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
