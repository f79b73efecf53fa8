//! SNOW 3G keystream CLI tool

mod config;
mod logging;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use snow3g_crypto::derive_keystream_words;
use tracing::{debug, info};

use config::{load_and_validate_session_file, Session};
use logging::{init_logging, LogLevel};
use output::{render, OutputFormat};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "snow3g-keystream")]
#[command(author, version, about = "Generate SNOW 3G keystream words", long_about = None)]
pub struct Args {
    /// 128-bit key as 32 hex digits
    #[arg(short = 'k', long = "key", value_name = "HEX", requires = "iv")]
    pub key: Option<String>,

    /// 128-bit IV as 32 hex digits
    #[arg(short = 'i', long = "iv", value_name = "HEX", requires = "key")]
    pub iv: Option<String>,

    /// Number of 32-bit keystream words
    #[arg(short = 'n', long = "words", value_name = "N", default_value_t = 1, conflicts_with = "config")]
    pub words: usize,

    /// YAML session file
    #[arg(short = 'c', long = "config", value_name = "FILE", conflicts_with_all = ["key", "iv"])]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Words)]
    pub format: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let sessions = sessions_from_args(args)?;
    let text = run_sessions(&sessions, args.format)?;
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}

/// Runs every session in order. With more than one session, each block is
/// preceded by a `[name]` header line.
fn run_sessions(sessions: &[Session], format: OutputFormat) -> Result<String> {
    let show_headers = sessions.len() > 1;
    let mut blocks = Vec::with_capacity(sessions.len());

    for session in sessions {
        let text = run_session(session, format)?;
        let block = match (show_headers, text.is_empty()) {
            (true, true) => format!("[{}]", session.name),
            (true, false) => format!("[{}]\n{}", session.name, text),
            (false, _) => text,
        };
        blocks.push(block);
    }
    Ok(blocks.join("\n"))
}

fn sessions_from_args(args: &Args) -> Result<Vec<Session>> {
    if let Some(path) = &args.config {
        let sessions = load_and_validate_session_file(path)
            .with_context(|| format!("Failed to load sessions from {}", path.display()))?;
        info!(count = sessions.len(), path = %path.display(), "loaded session file");
        return Ok(sessions);
    }

    match (&args.key, &args.iv) {
        (Some(key), Some(iv)) => {
            let session = Session::from_hex("cli", key, iv, args.words)
                .context("Invalid key/IV arguments")?;
            Ok(vec![session])
        }
        _ => bail!("Either --key and --iv, or --config, is required"),
    }
}

fn run_session(session: &Session, format: OutputFormat) -> Result<String> {
    debug!(session = %session.name, words = session.words, "deriving keystream");
    let words = derive_keystream_words(&session.key, &session.iv, session.words)
        .with_context(|| format!("Session '{}' failed", session.name))?;
    info!(session = %session.name, words = words.len(), "keystream generated");
    Ok(render(&words, format))
}
