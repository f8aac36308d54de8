mod commands;
mod config;
mod history;
mod qa;
mod resolver;
mod state;

use clap::Parser;
use tracing::info;

use commands::Cli;
use config::AppConfig;
use qa::AnswerStore;
use state::AppState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Logs go to stderr so stdout carries only answers (and --json output).
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let store = AnswerStore::new(&config.data_dir);
    info!(
        entries = store.len(),
        suggestion_limit = config.suggestion_limit,
        fallback_limit = config.fallback_limit,
        "Offline answer desk ready"
    );

    let mut state = AppState::new(store, config);
    commands::run(cli.command, &mut state)
}
