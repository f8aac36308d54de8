pub mod catalog;
pub mod ingest;
pub mod types;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use types::AnswerRecord;

/// Default cap on [`AnswerStore::suggestions`].
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

const SCORE_EXACT: f64 = 1.0;
const SCORE_QUESTION_CONTAINS_QUERY: f64 = 0.8;
const SCORE_QUERY_CONTAINS_QUESTION: f64 = 0.6;

/// Lowercase and trim. Every key and every lookup goes through this.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Read-only question/answer catalog.
///
/// Records keep insertion order; that order drives suggestion scans, tie
/// breaking in [`AnswerStore::get_answer`] and [`AnswerStore::all_answers`].
#[derive(Debug, Clone, Default)]
pub struct AnswerStore {
    records: Vec<AnswerRecord>,
    /// Normalized question for each record, parallel to `records`.
    keys: Vec<String>,
    index: HashMap<String, usize>,
}

impl AnswerStore {
    /// Built-in catalog followed by any supplementary files in `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        let mut builder = Self::builder();
        catalog::populate(&mut builder);
        ingest::load_dir(&mut builder, data_dir);
        let store = builder.build();
        info!(entries = store.len(), data_dir = %data_dir.display(), "Answer store initialized");
        store
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Direct match, or a substring relationship in either direction.
    pub fn has_answer(&self, query: &str) -> bool {
        let query = normalize(query);
        if self.index.contains_key(&query) {
            return true;
        }
        self.keys
            .iter()
            .any(|key| key.contains(query.as_str()) || query.contains(key.as_str()))
    }

    /// Best single answer for `query`, scored for that query.
    pub fn get_answer(&self, query: &str) -> Option<AnswerRecord> {
        let query = normalize(query);
        if let Some(&idx) = self.index.get(&query) {
            return Some(self.records[idx].with_score(SCORE_EXACT));
        }

        let mut best: Option<(usize, f64)> = None;
        for (idx, key) in self.keys.iter().enumerate() {
            let score = if *key == query {
                SCORE_EXACT
            } else if key.contains(query.as_str()) {
                SCORE_QUESTION_CONTAINS_QUERY
            } else if query.contains(key.as_str()) {
                SCORE_QUERY_CONTAINS_QUESTION
            } else {
                continue;
            };
            // Strictly greater: ties keep the earlier record.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((idx, score));
            }
        }

        best.map(|(idx, score)| self.records[idx].with_score(score))
    }

    /// Every distinct record, in insertion order.
    pub fn all_answers(&self) -> &[AnswerRecord] {
        &self.records
    }

    /// Original question texts containing `partial` (case-insensitive), in
    /// store order, at most `limit` of them. Blank input yields nothing.
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<String> {
        let partial = normalize(partial);
        if partial.is_empty() {
            return Vec::new();
        }
        self.keys
            .iter()
            .zip(&self.records)
            .filter(|(key, _)| key.contains(partial.as_str()))
            .map(|(_, record)| record.question.clone())
            .take(limit)
            .collect()
    }

    /// Records grouped by category name, categories sorted, records in store order.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&AnswerRecord>> {
        let mut groups: BTreeMap<&str, Vec<&AnswerRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.category.as_str()).or_default().push(record);
        }
        groups
    }
}

/// Accumulates records before the store is frozen.
#[derive(Debug)]
pub struct StoreBuilder {
    store: AnswerStore,
    loaded_at: DateTime<Utc>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self {
            store: AnswerStore::default(),
            loaded_at: Utc::now(),
        }
    }

    /// Insert a question/answer pair. Returns `false` when the question is
    /// blank or its normalized form is already present (first writer wins).
    pub fn add_qa(&mut self, question: &str, answer: &str, category: &str) -> bool {
        let key = normalize(question);
        if key.is_empty() {
            debug!(question, "skipping blank question");
            return false;
        }
        if self.store.index.contains_key(&key) {
            debug!(question, "duplicate question ignored");
            return false;
        }

        let record = AnswerRecord::new(question, answer, category, self.loaded_at);
        self.store.index.insert(key.clone(), self.store.records.len());
        self.store.keys.push(key);
        self.store.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn build(self) -> AnswerStore {
        self.store
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_of(entries: &[(&str, &str, &str)]) -> AnswerStore {
        let mut builder = AnswerStore::builder();
        for (q, a, c) in entries {
            builder.add_qa(q, a, c);
        }
        builder.build()
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let store = store_of(&[("What is Rust", "A language.", "Programming")]);
        for query in ["what is rust", "  WHAT IS RUST  ", "What is Rust"] {
            assert!(store.has_answer(query));
            let answer = store.get_answer(query).unwrap();
            assert_eq!(answer.question, "What is Rust");
            assert_eq!(answer.score, 1.0);
        }
    }

    #[test]
    fn test_unrelated_query_has_no_answer() {
        let store = store_of(&[("hello", "Hi", "Greetings"), ("what is pi", "3.14", "Math")]);
        assert!(!store.has_answer("xyzzy"));
        assert!(store.get_answer("xyzzy").is_none());
    }

    #[test]
    fn test_partial_scores() {
        let store = store_of(&[("what is pi", "3.14", "Math"), ("hi", "Hello", "Greetings")]);

        let contained = store.get_answer("is p").unwrap();
        assert_eq!(contained.question, "what is pi");
        assert_eq!(contained.score, 0.8);

        let containing = store.get_answer("well hi there").unwrap();
        assert_eq!(containing.question, "hi");
        assert_eq!(containing.score, 0.6);
        assert!(store.has_answer("well hi there"));
    }

    #[test]
    fn test_higher_score_beats_earlier_candidate() {
        // "a" sits inside the query (0.6); "tai" contains the query (0.8).
        let store = store_of(&[("a", "letter", "Language"), ("tai", "chi", "Health")]);
        let answer = store.get_answer("ai").unwrap();
        assert_eq!(answer.question, "tai");
        assert_eq!(answer.score, 0.8);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let store = store_of(&[
            ("what is pi", "3.14", "Math"),
            ("what is the square root", "sqrt", "Math"),
        ]);
        let answer = store.get_answer("what is").unwrap();
        assert_eq!(answer.question, "what is pi");
        assert_eq!(answer.score, 0.8);
    }

    #[test]
    fn test_first_writer_wins() {
        let mut builder = AnswerStore::builder();
        assert!(builder.add_qa("Hello", "first", "Greetings"));
        assert!(!builder.add_qa("  hello ", "second", "Other"));
        assert!(!builder.add_qa("   ", "blank", "Other"));
        let store = builder.build();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_answer("HELLO").unwrap().answer, "first");
        assert_eq!(store.suggestions("hel", 10), vec!["Hello".to_string()]);
    }

    #[test]
    fn test_suggestions_empty_partial() {
        let store = AnswerStore::new(Path::new("/nonexistent/quickanswer-data"));
        assert!(store.suggestions("", DEFAULT_SUGGESTION_LIMIT).is_empty());
        assert!(store.suggestions("   ", DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_suggestions_bounded_and_matching() {
        let store = AnswerStore::new(Path::new("/nonexistent/quickanswer-data"));
        for partial in ["what", "IS", "capital", "e", "good"] {
            let found = store.suggestions(partial, DEFAULT_SUGGESTION_LIMIT);
            assert!(found.len() <= DEFAULT_SUGGESTION_LIMIT);
            for s in &found {
                assert!(s.to_lowercase().contains(&partial.to_lowercase()));
            }
        }
        assert_eq!(store.suggestions("what", DEFAULT_SUGGESTION_LIMIT).len(), 10);
        assert_eq!(store.suggestions("what", 3).len(), 3);
    }

    #[test]
    fn test_suggestions_keep_store_order() {
        let store = store_of(&[
            ("what is pi", "3.14", "Math"),
            ("hello", "Hi", "Greetings"),
            ("What is the square root", "sqrt", "Math"),
        ]);
        assert_eq!(
            store.suggestions("WHAT", 10),
            vec!["what is pi".to_string(), "What is the square root".to_string()]
        );
    }

    #[test]
    fn test_builtin_catalog_exact_lookups() {
        let store = AnswerStore::new(Path::new("/nonexistent/quickanswer-data"));
        assert!(store.len() >= 80);
        for record in store.all_answers() {
            let found = store.get_answer(&record.question.to_uppercase()).unwrap();
            assert_eq!(found.question, record.question);
            assert_eq!(found.answer, record.answer);
            assert_eq!(found.score, 1.0);
        }
    }

    #[test]
    fn test_by_category_groups_records() {
        let store = store_of(&[
            ("hello", "Hi", "Greetings"),
            ("what is pi", "3.14", "Math"),
            ("hey", "Hey", "Greetings"),
        ]);
        let groups = store.by_category();
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec!["Greetings", "Math"]);
        assert_eq!(groups["Greetings"].len(), 2);
        assert_eq!(groups["Greetings"][1].question, "hey");
    }
}
