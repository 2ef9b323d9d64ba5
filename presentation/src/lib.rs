//! Presentation layer for deepthink
//!
//! This crate contains the HTTP API, CLI definitions, message bubble
//! formatting, the thinking indicator and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{AskArgs, ChatArgs, Cli, Command, OutputFormat, ServeArgs};
pub use config::{OutputConfig, ReplConfig};
pub use output::{ConsoleFormatter, OutputFormatter, render_reply};
pub use progress::ThinkingIndicator;
pub use server::{AppState, build_router, serve};
