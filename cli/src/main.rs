//! CLI entrypoint for DeepThink
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use deepthink_application::{
    AnswerQueryUseCase, ChatController, NoSessionStore, SessionStore,
};
use deepthink_domain::{ChatRequest, Locale, WireMessage};
use deepthink_infrastructure::{
    ConfigLoader, DuckDuckGoClient, FileConfig, HttpChatTransport, JsonSessionStore, Severity,
};
use deepthink_presentation::{
    AppState, AskArgs, ChatArgs, ChatRepl, Cli, Command, OutputConfig, OutputFormat, ReplConfig,
    ServeArgs, render_reply,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keeps the file writer flushing until exit
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    check_config(&config)?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color && config.output.color;
    let (locale, _) = config.synthesis.parse_locale();

    info!("Starting DeepThink");

    match cli.command {
        Command::Serve(args) => serve(args, &config, locale).await,
        Command::Chat(args) => chat(args, &config, locale, color).await,
        Command::Ask(args) => ask(args, &config, locale, color).await,
    }
}

fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level, RUST_LOG when not given
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "deepthink.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if FileConfig::has_errors(&issues) {
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }
    Ok(())
}

fn answer_query_use_case(config: &FileConfig, locale: Locale) -> Result<AnswerQueryUseCase> {
    // === Dependency Injection ===
    let gateway = DuckDuckGoClient::from_config(&config.search)
        .context("Failed to build the search client")?;
    info!("Search endpoint: {}", gateway.endpoint());
    Ok(AnswerQueryUseCase::new(Arc::new(gateway)).with_locale(locale))
}

async fn serve(args: ServeArgs, config: &FileConfig, locale: Locale) -> Result<()> {
    let bind = match args.bind {
        Some(addr) => addr,
        None => config
            .server
            .parse_bind()
            .with_context(|| format!("Invalid server.bind '{}'", config.server.bind))?,
    };

    let state = AppState::new(answer_query_use_case(config, locale)?);
    deepthink_presentation::serve(bind, state)
        .await
        .with_context(|| format!("Server on {bind} failed"))
}

async fn chat(args: ChatArgs, config: &FileConfig, locale: Locale, color: bool) -> Result<()> {
    let server_url = args
        .server
        .unwrap_or_else(|| config.client.server_url.clone());
    let transport = Arc::new(HttpChatTransport::new(&server_url));
    info!("Chatting with {}", transport.endpoint());

    let store: Arc<dyn SessionStore> = if args.ephemeral {
        Arc::new(NoSessionStore)
    } else {
        match args.session_file.or_else(|| config.client.session_path()) {
            Some(path) => {
                info!("Session file: {}", path.display());
                Arc::new(JsonSessionStore::new(path))
            }
            None => {
                warn!("No data directory available, the conversation will not be saved");
                Arc::new(NoSessionStore)
            }
        }
    };

    let controller = ChatController::with_locale(transport, store, locale);
    let repl_config = ReplConfig {
        show_progress: config.client.show_progress && !args.quiet,
        history_file: if args.ephemeral {
            None
        } else {
            config.client.history_path()
        },
        color,
    };

    let mut repl = ChatRepl::new(controller, repl_config);
    repl.run().await?;
    Ok(())
}

async fn ask(args: AskArgs, config: &FileConfig, locale: Locale, color: bool) -> Result<()> {
    let query = args.query.trim();
    if query.is_empty() {
        bail!("Query must not be empty");
    }

    let use_case = answer_query_use_case(config, locale)?;
    let request = ChatRequest::new(vec![WireMessage::user(query)]);
    let reply = use_case
        .execute(&request)
        .await
        .context("Failed to generate response")?;

    let output_config = OutputConfig {
        json: args.format() == OutputFormat::Json,
        color,
    };
    println!("{}", render_reply(reply, &output_config)?);

    Ok(())
}
