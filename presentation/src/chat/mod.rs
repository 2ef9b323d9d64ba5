//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for DeepThink.

mod repl;

pub use repl::{ChatRepl, CommandAction};
