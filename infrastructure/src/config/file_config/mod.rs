//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod client;
mod output;
mod search;
mod server;
mod synthesis;

pub use client::{DEFAULT_SERVER_URL, FileClientConfig};
pub use output::FileOutputConfig;
pub use search::{DEFAULT_SEARCH_ENDPOINT, DEFAULT_USER_AGENT, FileSearchConfig};
pub use server::{DEFAULT_BIND, FileServerConfig};
pub use synthesis::FileSynthesisConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending key
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Upstream search settings
    pub search: FileSearchConfig,
    /// Reply synthesis settings
    pub synthesis: FileSynthesisConfig,
    /// Chat client settings
    pub client: FileClientConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.server.parse_bind() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "server.bind".to_string(),
                message: format!("server.bind: '{}' is not a socket address ({})", self.server.bind, e),
            });
        }

        if self.search.endpoint.trim().is_empty() {
            issues.push(empty_issue("search.endpoint"));
        }

        if self.client.server_url.trim().is_empty() {
            issues.push(empty_issue("client.server_url"));
        }

        issues.extend(self.synthesis.parse_locale().1);

        issues
    }

    /// Whether any issue prevents the configuration from being used
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

fn empty_issue(field: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        field: field.to_string(),
        message: format!("{field}: must not be empty"),
    }
}
