//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Default listen address for `deepthink serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address the HTTP server listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn parse_bind(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.bind.trim().parse()
    }
}
