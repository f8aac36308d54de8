use crate::config::AppConfig;
use crate::history::{Navigation, SearchHistory};
use crate::qa::types::AnswerRecord;
use crate::qa::AnswerStore;
use crate::resolver::ResolveOptions;

/// Everything a command needs. The store is frozen; the history and
/// navigation lists change as the session runs.
pub struct AppState {
    pub store: AnswerStore,
    pub config: AppConfig,
    pub resolve_options: ResolveOptions,
    pub history: SearchHistory,
    pub navigation: Navigation,
    /// Results of the latest query, numbered from 1 for `:open`.
    pub last_results: Vec<AnswerRecord>,
}

impl AppState {
    pub fn new(store: AnswerStore, config: AppConfig) -> Self {
        Self {
            resolve_options: config.resolve_options(),
            history: SearchHistory::new(config.history_size),
            navigation: Navigation::new(),
            last_results: Vec::new(),
            store,
            config,
        }
    }
}
