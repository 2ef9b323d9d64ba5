//! Console message bubbles
//!
//! Each message renders as a framed block:
//!
//! ```text
//! ╭─ DeepThink · neural synthesis
//! │ Here's what I gathered on «weather»:
//! │ ...
//! │
//! │ Deliberation Trace
//! │   • Formulating search strategies for «weather».
//! │
//! │ Sources
//! │   1. Weather
//! │      https://x
//! │      Weather is...
//! ╰─
//! ```

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use deepthink_domain::{Message, Role, Source};

/// Formats messages for terminal display
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Formatter that never emits ANSI escapes
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn label(role: Role) -> &'static str {
        match role {
            Role::User => "You",
            Role::Assistant | Role::Thinking => "DeepThink",
            Role::System => "System",
        }
    }

    pub fn tag(role: Role) -> &'static str {
        match role {
            Role::Assistant => "neural synthesis",
            Role::User => "human prompt",
            Role::Thinking => "cognitive trace",
            Role::System => "system",
        }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, role: Role) -> String {
        let label = Self::label(role);
        let label = match role {
            Role::User => self.paint(label, |s| s.cyan().bold()),
            Role::Assistant => self.paint(label, |s| s.magenta().bold()),
            Role::Thinking => self.paint(label, |s| s.magenta().dimmed()),
            Role::System => self.paint(label, |s| s.yellow().bold()),
        };
        format!(
            "{} {} {}",
            self.paint("╭─", |s| s.dimmed()),
            label,
            self.paint(&format!("· {}", Self::tag(role)), |s| s.dimmed())
        )
    }

    fn body_line(&self, line: &str) -> String {
        if line.is_empty() {
            self.paint("│", |s| s.dimmed())
        } else {
            format!("{} {}", self.paint("│", |s| s.dimmed()), line)
        }
    }

    fn thoughts_section(&self, thoughts: &[String], lines: &mut Vec<String>) {
        lines.push(self.body_line(""));
        lines.push(self.body_line(&self.paint("Deliberation Trace", |s| s.bold())));
        for thought in thoughts {
            lines.push(self.body_line(&format!(
                "  {} {}",
                self.paint("•", |s| s.magenta()),
                self.paint(thought, |s| s.italic())
            )));
        }
    }

    fn sources_section(&self, sources: &[Source], lines: &mut Vec<String>) {
        lines.push(self.body_line(""));
        lines.push(self.body_line(&self.paint("Sources", |s| s.bold())));
        for (i, source) in sources.iter().enumerate() {
            let title = if source.title.is_empty() {
                &source.url
            } else {
                &source.title
            };
            lines.push(self.body_line(&format!("  {}. {}", i + 1, title)));
            lines.push(self.body_line(&format!(
                "     {}",
                self.paint(&source.url, |s| s.blue().underline())
            )));
            if !source.snippet.is_empty() {
                lines.push(self.body_line(&format!(
                    "     {}",
                    self.paint(&source.snippet, |s| s.dimmed())
                )));
            }
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_message(&self, message: &Message) -> String {
        let mut lines = vec![self.header(message.role)];

        for line in message.content.lines() {
            lines.push(self.body_line(line));
        }

        if let Some(thoughts) = message.thoughts.as_deref()
            && !thoughts.is_empty()
        {
            self.thoughts_section(thoughts, &mut lines);
        }

        if let Some(sources) = message.sources.as_deref()
            && !sources.is_empty()
        {
            self.sources_section(sources, &mut lines);
        }

        lines.push(self.paint("╰─", |s| s.dimmed()));
        lines.join("\n")
    }
}
