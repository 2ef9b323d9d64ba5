//! Infrastructure layer for deepthink
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod search;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileClientConfig, FileConfig, FileOutputConfig, FileSearchConfig,
    FileServerConfig, FileSynthesisConfig, Severity,
};
pub use search::DuckDuckGoClient;
pub use session::JsonSessionStore;
pub use transport::{CHAT_PATH, HttpChatTransport};
