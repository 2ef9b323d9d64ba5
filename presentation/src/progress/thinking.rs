//! Animated "deep think" indicator shown while a turn is in flight

use colored::Colorize;
use deepthink_application::{ChatState, TurnObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(120);

/// Spinner driven by chat state changes
pub struct ThinkingIndicator {
    label: String,
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingIndicator {
    pub fn new() -> Self {
        Self::with_label("deep think")
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["·  ", "·· ", "···", " ··", "  ·", "   ", "···"])
    }

    fn start(&self) {
        let Ok(mut slot) = self.bar.lock() else {
            return;
        };
        if slot.is_some() {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(self.label.as_str().magenta().to_string());
        pb.enable_steady_tick(TICK);
        *slot = Some(pb);
    }

    fn stop(&self) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_spinning(&self) -> bool {
        self.bar.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }
}

impl Default for ThinkingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnObserver for ThinkingIndicator {
    fn on_state_change(&self, state: ChatState) {
        match state {
            ChatState::AwaitingResponse => self.start(),
            ChatState::Idle => self.stop(),
            ChatState::Submitting => {}
        }
    }
}

impl Drop for ThinkingIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}
