//! Configuration file loading for deepthink
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEEPTHINK_*` environment variables (`__` separates section and key)
//! 2. `--config <path>` specified file
//! 3. Project root: `./deepthink.toml` or `./.deepthink.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/deepthink/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_BIND, DEFAULT_SEARCH_ENDPOINT, DEFAULT_SERVER_URL, DEFAULT_USER_AGENT,
    FileClientConfig, FileConfig, FileOutputConfig, FileSearchConfig, FileServerConfig,
    FileSynthesisConfig, Severity,
};
pub use loader::ConfigLoader;
