mod ask;
mod config;
mod repl;
mod sources;
mod suggest;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::AppState;

/// Offline question-and-answer desk
#[derive(Parser)]
#[command(name = "quickanswer", version)]
pub struct Cli {
    /// Directory scanned for extra *.json / *.csv answer files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up an answer
    Ask {
        /// Your question
        #[arg(required = true)]
        query: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show catalog questions matching partial text
    Suggest {
        partial: String,
        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog questions by category
    Sources {
        /// Max questions to show per category
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the effective configuration
    Config,

    /// Interactive prompt (default)
    Repl,
}

pub fn run(command: Option<Command>, state: &mut AppState) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command.unwrap_or(Command::Repl) {
        Command::Ask { query, json } => ask::ask(state, &query.join(" "), json, &mut out)?,
        Command::Suggest {
            partial,
            limit,
            json,
        } => suggest::suggest(state, &partial, limit, json, &mut out)?,
        Command::Sources { limit } => sources::sources(state, limit, &mut out)?,
        Command::Config => config::config(state, &mut out)?,
        Command::Repl => repl::run(state, io::stdin().lock(), &mut out)?,
    }

    out.flush()?;
    Ok(())
}
