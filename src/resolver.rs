use tracing::debug;

use crate::qa::types::AnswerRecord;
use crate::qa::{normalize, AnswerStore, DEFAULT_SUGGESTION_LIMIT};

/// Default size of the catalog dump shown when nothing matches.
pub const DEFAULT_FALLBACK_LIMIT: usize = 25;

#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    pub suggestion_limit: usize,
    pub fallback_limit: usize,
    /// Append a suggestion even when its question is already in the results.
    pub keep_duplicates: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            fallback_limit: DEFAULT_FALLBACK_LIMIT,
            keep_duplicates: false,
        }
    }
}

/// Assemble the results for `query`: the direct/fuzzy answer first, then the
/// answers for each suggestion, and a slice of the catalog if both are empty.
pub fn resolve(store: &AnswerStore, query: &str, opts: &ResolveOptions) -> Vec<AnswerRecord> {
    let mut results: Vec<AnswerRecord> = Vec::new();

    if store.has_answer(query) {
        if let Some(answer) = store.get_answer(query) {
            results.push(answer);
        }
    }
    let direct = results.len();

    for suggestion in store.suggestions(query, opts.suggestion_limit) {
        let Some(answer) = store.get_answer(&suggestion) else {
            continue;
        };
        if !opts.keep_duplicates && contains_question(&results, &answer.question) {
            continue;
        }
        results.push(answer);
    }
    let suggested = results.len() - direct;

    if results.is_empty() {
        results.extend(
            store
                .all_answers()
                .iter()
                .take(opts.fallback_limit)
                .cloned(),
        );
        debug!(query, fallback = results.len(), "No match, showing catalog");
    } else {
        debug!(query, direct, suggested, "Query resolved");
    }

    results
}

fn contains_question(results: &[AnswerRecord], question: &str) -> bool {
    let key = normalize(question);
    results.iter().any(|r| normalize(&r.question) == key)
}
