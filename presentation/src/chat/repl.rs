//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::{ConsoleFormatter, OutputFormatter};
use crate::progress::ThinkingIndicator;
use colored::Colorize;
use deepthink_application::{ChatController, ChatState, TurnObserver, TurnOutcome};
use deepthink_domain::{Message, Role};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::{debug, warn};

/// What the REPL should do after a slash command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Continue,
    Exit,
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatController,
    formatter: ConsoleFormatter,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: ChatController, config: ReplConfig) -> Self {
        Self {
            controller,
            formatter: ConsoleFormatter::new(config.color),
            config,
        }
    }

    pub fn controller(&self) -> &ChatController {
        &self.controller
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.controller.restore();
        self.print_welcome();
        self.print_history();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) == CommandAction::Exit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    // Input is blocked until the turn completes
                    self.process_prompt(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.config.history_file
            && let Err(e) = rl.save_history(path)
        {
            warn!("Failed to save line history: {}", e);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              DeepThink - Chat               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Ask anything. I will reason, search, and synthesize.");
        println!("Type /help for commands.");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Show the conversation so far");
        println!("  /clear            - Start a new conversation");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    fn print_history(&self) {
        println!("{}", self.formatter.format_session(self.controller.session()));
        println!();
    }

    /// Handle slash commands
    pub fn handle_command(&mut self, cmd: &str) -> CommandAction {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandAction::Exit
            }
            "/help" | "/h" | "/?" => {
                self.print_help();
                CommandAction::Continue
            }
            "/history" => {
                self.print_history();
                CommandAction::Continue
            }
            "/clear" => {
                self.controller.clear();
                println!("{}", "Conversation cleared.".dimmed());
                println!();
                self.print_history();
                CommandAction::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandAction::Continue
            }
        }
    }

    async fn process_prompt(&mut self, prompt: &str) {
        println!();
        let observer = TurnPrinter {
            formatter: self.formatter,
            indicator: self.config.show_progress.then(ThinkingIndicator::new),
        };

        match self.controller.submit(prompt, &observer).await {
            Ok(outcome) => {
                if let TurnOutcome::Fallback { error, .. } = &outcome {
                    debug!("Showing fallback reply after: {}", error);
                }
                println!("{}", self.formatter.format_message(outcome.message()));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}

/// Echoes the prompt and placeholder bubbles and drives the spinner
struct TurnPrinter {
    formatter: ConsoleFormatter,
    indicator: Option<ThinkingIndicator>,
}

impl TurnPrinter {
    /// Bubble to print when `message` is appended mid-turn.
    ///
    /// The reply is printed by the REPL once the spinner is gone.
    fn render(&self, message: &Message) -> Option<String> {
        match message.role {
            Role::User | Role::Thinking => Some(self.formatter.format_message(message)),
            Role::Assistant | Role::System => None,
        }
    }
}

impl TurnObserver for TurnPrinter {
    fn on_state_change(&self, state: ChatState) {
        if let Some(indicator) = &self.indicator {
            indicator.on_state_change(state);
        }
    }

    fn on_message(&self, message: &Message) {
        if let Some(bubble) = self.render(message) {
            println!("{}", bubble);
        }
    }
}
