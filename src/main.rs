use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use feedstore::action::{Action, RawAction};
use feedstore::app::{AppReducer, AppState};
use feedstore::config::Config;
use feedstore::logging::{init_tracing, LogTarget, LOG_ENV};
use feedstore::mvi::Reducer;

#[derive(Parser)]
#[command(name = "feedstore", version, about = "Normalized feed store tools")]
struct Cli {
    /// Log target: `stderr`, or a file path (overrides FEEDSTORE_LOG)
    #[arg(long, global = true, value_name = "TARGET")]
    log: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON-lines action log and print the resulting state
    Replay {
        /// File with one dispatched action per line
        file: PathBuf,
        /// Config file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the resulting state
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let target = match cli.log.as_deref() {
        Some(value) => LogTarget::parse(Some(value)),
        None => LogTarget::from_env(),
    };
    init_tracing(&target).with_context(|| format!("Failed to set up logging ({})", LOG_ENV))?;

    match cli.command {
        Commands::Replay {
            file,
            config,
            pretty,
        } => replay(&file, config.as_deref(), pretty),
    }
}

fn replay(file: &Path, config: Option<&Path>, pretty: bool) -> Result<()> {
    let config = match config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    let reducer = AppReducer::from_config(&config);
    let log = File::open(file).with_context(|| format!("Failed to open {}", file.display()))?;

    let mut state: AppState = reducer.initial_state();
    for (index, line) in BufReader::new(log).lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        let action = RawAction::from_json(&line)
            .and_then(Action::decode)
            .with_context(|| format!("Invalid action on line {}", line_no))?;
        state = reducer.reduce(state, action);
    }
    tracing::info!(file = %file.display(), "replay finished");

    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, &state)?;
    } else {
        serde_json::to_writer(&mut stdout, &state)?;
    }
    writeln!(stdout)?;
    Ok(())
}
