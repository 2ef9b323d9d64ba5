//! Output formatting

pub mod console;
pub mod formatter;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;

use crate::config::OutputConfig;
use deepthink_domain::ChatReply;

/// Render a one-shot reply as JSON or as an assistant bubble
pub fn render_reply(reply: ChatReply, config: &OutputConfig) -> serde_json::Result<String> {
    let formatter = ConsoleFormatter::new(config.color);
    if config.json {
        formatter.format_json(&reply)
    } else {
        Ok(formatter.format_message(&reply.into_message()))
    }
}
