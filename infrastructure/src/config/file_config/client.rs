//! Chat client configuration from TOML (`[client]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Server the chat client talks to by default
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Raw chat client configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClientConfig {
    /// Base URL of the deepthink server
    pub server_url: String,
    /// Where the session is persisted; defaults to the platform data dir
    pub session_file: Option<String>,
    /// Show the thinking indicator while waiting
    pub show_progress: bool,
    /// Path to the prompt history file
    pub history_file: Option<String>,
}

impl Default for FileClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            session_file: None,
            show_progress: true,
            history_file: None,
        }
    }
}

impl FileClientConfig {
    /// Session file path, explicit or `$DATA_DIR/deepthink/session.json`
    pub fn session_path(&self) -> Option<PathBuf> {
        match &self.session_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join("deepthink").join("session.json")),
        }
    }

    /// History file path, explicit or `$DATA_DIR/deepthink/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|d| d.join("deepthink").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_session_path() {
        let config = FileClientConfig {
            session_file: Some("/tmp/s.json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.session_path(), Some(PathBuf::from("/tmp/s.json")));
    }
}
