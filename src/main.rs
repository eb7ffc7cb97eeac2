// MindWell - Rule-based mental fitness chatbot
// Main entry point

use anyhow::{anyhow, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mindwell::cli::{InputHandler, Renderer, Repl};
use mindwell::config::{load_config, Config};
use mindwell::errors::{knowledge_base_error, questionnaire_invalid_error, UserFriendlyError};
use mindwell::questionnaire::Questionnaire;
use mindwell::router::{KnowledgeBase, ResponseEngine};
use mindwell::sentiment::LexiconAnalyzer;
use mindwell::session::Session;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "mindwell")]
#[command(about = "Rule-based mental fitness chatbot with PHQ-9 screening", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Questionnaire JSON (overrides config and MINDWELL_QUESTIONNAIRE)
    #[arg(long, global = true)]
    questionnaire: Option<PathBuf>,

    /// Response knowledge base JSON
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    /// Seed for response selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Plain output without terminal styling
    #[arg(long = "no-color", global = true)]
    no_color: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Take the assessment, then chat (default)
    Chat,
    /// Print the reply and category for a single message
    Respond {
        /// Message text
        text: String,
    },
    /// Load and validate a questionnaire file
    Validate {
        /// Path to the questionnaire (defaults to the configured one)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    install_panic_handler();

    let args = Args::parse();
    let mut config = load_config()?;
    apply_overrides(&mut config, &args);

    init_tracing(config.debug_logging);

    match args.command {
        Some(Command::Respond { text }) => run_respond(&config, &text),
        Some(Command::Validate { path }) => {
            let path = path.unwrap_or_else(|| config.questionnaire_path.clone());
            run_validate(&path)
        }
        Some(Command::Chat) | None => run_chat(&config),
    }
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.questionnaire {
        config.questionnaire_path = path.clone();
    }
    if let Some(path) = &args.knowledge {
        config.knowledge_path = Some(path.clone());
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_color || !io::stdout().is_terminal() {
        config.color = false;
    }
}

/// Questionnaire from the configured path, or the built-in set if it is unreadable
fn load_questionnaire(config: &Config) -> Result<Arc<Questionnaire>> {
    let path = &config.questionnaire_path;
    Questionnaire::load_or_default(path)
        .map(Arc::new)
        .map_err(|e| {
            anyhow!(questionnaire_invalid_error(
                &path.display().to_string(),
                &e.to_string()
            ))
        })
}

fn load_engine(config: &Config) -> Result<Arc<ResponseEngine>> {
    let Some(path) = &config.knowledge_path else {
        return Ok(Arc::new(ResponseEngine::with_defaults()));
    };

    let to_friendly = |e: mindwell::MindwellError| {
        anyhow!(knowledge_base_error(&path.display().to_string(), &e.to_string()))
    };
    let knowledge = KnowledgeBase::load_from_file(path).map_err(to_friendly)?;
    let engine =
        ResponseEngine::new(knowledge, Arc::new(LexiconAnalyzer::new())).map_err(to_friendly)?;
    Ok(Arc::new(engine))
}

fn rng_for(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Run the interactive assessment and chat
fn run_chat(config: &Config) -> Result<()> {
    let questionnaire = load_questionnaire(config)?;
    let engine = load_engine(config)?;
    let session = Session::with_rng(questionnaire, engine, rng_for(config));
    tracing::info!("Starting session {}", session.id());

    let interactive = io::stdin().is_terminal();
    let input = InputHandler::new(interactive).user_context_with_suggestion(
        "Failed to start the line editor",
        "Pipe answers on stdin instead, e.g. `mindwell < answers.txt`",
    )?;
    let repl = Repl::new(session, input, Renderer::new(config.color));

    let session = repl.run().user_context("Chat session stopped on an input error")?;
    tracing::info!(
        "Session {} finished with {} messages",
        session.id(),
        session.transcript().message_count()
    );
    Ok(())
}

/// Print one engine reply, bypassing the assessment
fn run_respond(config: &Config, text: &str) -> Result<()> {
    let engine = load_engine(config)?;
    let mut rng = rng_for(config);

    let response = engine.respond(text, &mut rng);
    let renderer = Renderer::new(config.color);
    println!("[{}] {}", response.category, renderer.markdown(&response.text));
    Ok(())
}

/// Validate a questionnaire without falling back to the built-in set
fn run_validate(path: &Path) -> Result<()> {
    let questionnaire = Questionnaire::load_from_file(path).map_err(|e| {
        anyhow!(questionnaire_invalid_error(
            &path.display().to_string(),
            &e.to_string()
        ))
    })?;

    println!("✓ {} is valid", path.display());
    println!("  Questions: {}", questionnaire.len());
    println!(
        "  Scale: {}",
        questionnaire
            .scale()
            .iter()
            .map(|p| format!("{} = {}", p.label, p.points))
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Interpretation (0-{}):", questionnaire.max_score());
    for range in questionnaire.interpretation().ranges() {
        println!("    {:>2}-{:<2} {}", range.low, range.high, range.label);
    }
    Ok(())
}

/// Install panic handler to restore the terminal if a panic hits mid-readline
fn install_panic_handler() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        default_panic(info);
    }));
}

/// Initialize tracing to stderr
///
/// Default level is WARN so logs stay out of the conversation; RUST_LOG
/// overrides it, and MINDWELL_DEBUG=1 or `debug_logging = true` raise it to DEBUG.
fn init_tracing(debug_logging: bool) {
    let show_debug = debug_logging
        || std::env::var("MINDWELL_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

    let default_level = if show_debug { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Bridge log crate → tracing (rustyline logs through `log`)
    tracing_log::LogTracer::init().ok();
}
