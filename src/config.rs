use std::path::PathBuf;
use std::str::FromStr;

use tracing::Level;

use crate::history::DEFAULT_HISTORY_SIZE;
use crate::qa::DEFAULT_SUGGESTION_LIMIT;
use crate::resolver::{ResolveOptions, DEFAULT_FALLBACK_LIMIT};

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub suggestion_limit: usize,
    pub fallback_limit: usize,
    pub history_size: usize,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./resources/data"),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            history_size: DEFAULT_HISTORY_SIZE,
            log_level: Level::WARN,
        }
    }
}

impl AppConfig {
    /// Missing or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let parsed = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(default)
        };

        Self {
            data_dir: lookup("QUICKANSWER_DATA_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            suggestion_limit: parsed("QUICKANSWER_SUGGESTION_LIMIT", defaults.suggestion_limit),
            fallback_limit: parsed("QUICKANSWER_FALLBACK_LIMIT", defaults.fallback_limit),
            history_size: parsed("QUICKANSWER_HISTORY_SIZE", defaults.history_size),
            log_level: lookup("QUICKANSWER_LOG")
                .and_then(|v| Level::from_str(v.trim()).ok())
                .unwrap_or(defaults.log_level),
        }
    }

    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            suggestion_limit: self.suggestion_limit,
            fallback_limit: self.fallback_limit,
            ..Default::default()
        }
    }
}
