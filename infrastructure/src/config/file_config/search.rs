//! Search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// DuckDuckGo Instant Answer API endpoint (no API key required)
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// User-Agent sent with every upstream request
pub const DEFAULT_USER_AGENT: &str = "DeepThink-Agent/1.0";

/// Raw search configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// Instant-answer endpoint URL
    pub endpoint: String,
    /// User-Agent header value
    pub user_agent: String,
    /// Upstream request timeout; unset means wait indefinitely
    pub timeout_seconds: Option<u64>,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileSearchConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}
