//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Emit JSON instead of bubbles (one-shot `ask` only)
    pub json: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the thinking spinner
    pub show_progress: bool,
    /// Path to the line-editor history file, `None` to keep no history
    pub history_file: Option<PathBuf>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            color: true,
        }
    }
}
