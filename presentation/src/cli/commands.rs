//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered message bubble
    Bubble,
    /// Raw `{reply, thoughts, sources}` JSON
    Json,
}

/// CLI arguments for deepthink
#[derive(Parser, Debug)]
#[command(name = "deepthink")]
#[command(author, version, about = "Chat assistant that searches, then synthesizes an answer")]
#[command(long_about = r#"
DeepThink answers questions by querying the DuckDuckGo Instant Answer API and
turning the results into a short overview with sources.

Run `deepthink serve` to start the HTTP API, then `deepthink chat` to talk to
it. `deepthink ask` answers a single question without a server.

Configuration files are loaded from (in priority order):
1. DEEPTHINK_* environment variables (e.g. DEEPTHINK_SERVER__BIND)
2. --config <path>     Explicit config file
3. ./deepthink.toml    Project-level config
4. ~/.config/deepthink/config.toml   Global config

Example:
  deepthink serve --bind 0.0.0.0:3000
  deepthink chat --server http://127.0.0.1:3000
  deepthink ask "rust programming language" --json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Start interactive chat against a running server
    Chat(ChatArgs),
    /// Answer one question in-process and exit
    Ask(AskArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Base URL of the deepthink server
    #[arg(long, value_name = "URL")]
    pub server: Option<String>,

    /// Where the conversation is persisted
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub session_file: Option<PathBuf>,

    /// Do not load or save the conversation
    #[arg(long)]
    pub ephemeral: bool,

    /// Suppress the thinking spinner
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer
    pub query: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "bubble")]
    pub output: OutputFormat,

    /// Shorthand for `--output json`
    #[arg(long)]
    pub json: bool,
}

impl AskArgs {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}
