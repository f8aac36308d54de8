use crate::qa::types::AnswerRecord;

/// Default number of queries kept by [`SearchHistory`].
pub const DEFAULT_HISTORY_SIZE: usize = 100;

const MAX_HISTORY_SUGGESTIONS: usize = 10;

/// Back/forward list of answers that were shown.
///
/// `cursor` is `None` exactly when `entries` is empty.
#[derive(Debug, Default)]
pub struct Navigation {
    entries: Vec<AnswerRecord>,
    cursor: Option<usize>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `record`, discarding anything ahead of the cursor first.
    pub fn navigate(&mut self, record: AnswerRecord) {
        if let Some(cursor) = self.cursor {
            self.entries.truncate(cursor + 1);
        }
        self.entries.push(record);
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn back(&mut self) -> Option<&AnswerRecord> {
        if !self.can_go_back() {
            return None;
        }
        let cursor = self.cursor? - 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    pub fn forward(&mut self) -> Option<&AnswerRecord> {
        if !self.can_go_forward() {
            return None;
        }
        let cursor = self.cursor? + 1;
        self.cursor = Some(cursor);
        self.entries.get(cursor)
    }

    pub fn current(&self) -> Option<&AnswerRecord> {
        self.entries.get(self.cursor?)
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Recent queries, most recent first, without repeats.
#[derive(Debug)]
pub struct SearchHistory {
    queries: Vec<String>,
    max_size: usize,
}

impl SearchHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            queries: Vec::new(),
            max_size,
        }
    }

    /// Record `query` (trimmed). Blank queries are ignored; an earlier
    /// identical entry moves to the front.
    pub fn add(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.queries.retain(|q| q != query);
        self.queries.insert(0, query.to_string());
        self.queries.truncate(self.max_size);
    }

    pub fn recent(&self, count: usize) -> &[String] {
        &self.queries[..count.min(self.queries.len())]
    }

    pub fn clear(&mut self) {
        self.queries.clear();
    }

    /// Earlier queries starting with `prefix` (case-insensitive), excluding
    /// `prefix` itself.
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        let lower = prefix.to_lowercase();
        self.queries
            .iter()
            .filter(|q| q.to_lowercase().starts_with(&lower) && q.as_str() != prefix)
            .take(MAX_HISTORY_SUGGESTIONS)
            .cloned()
            .collect()
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn record(question: &str) -> AnswerRecord {
        AnswerRecord::new(question, "answer", "General", Utc::now())
    }

    fn current_question(nav: &Navigation) -> Option<&str> {
        nav.current().map(|r| r.question.as_str())
    }

    #[test]
    fn test_empty_navigation() {
        let mut nav = Navigation::new();
        assert!(nav.current().is_none());
        assert!(!nav.can_go_back());
        assert!(!nav.can_go_forward());
        assert!(nav.back().is_none());
        assert!(nav.forward().is_none());
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = Navigation::new();
        nav.navigate(record("a"));
        nav.navigate(record("b"));
        nav.navigate(record("c"));
        assert_eq!(current_question(&nav), Some("c"));
        assert!(!nav.can_go_forward());

        assert_eq!(nav.back().map(|r| r.question.as_str()), Some("b"));
        assert_eq!(nav.back().map(|r| r.question.as_str()), Some("a"));
        assert!(nav.back().is_none());
        assert_eq!(current_question(&nav), Some("a"));

        assert_eq!(nav.forward().map(|r| r.question.as_str()), Some("b"));
        assert!(nav.can_go_back());
        assert!(nav.can_go_forward());
    }

    #[test]
    fn test_navigate_mid_history_clears_forward() {
        let mut nav = Navigation::new();
        nav.navigate(record("a"));
        nav.navigate(record("b"));
        nav.navigate(record("c"));
        nav.back();
        nav.back();

        nav.navigate(record("d"));
        assert_eq!(nav.len(), 2);
        assert_eq!(current_question(&nav), Some("d"));
        assert!(!nav.can_go_forward());
        assert_eq!(nav.back().map(|r| r.question.as_str()), Some("a"));
    }

    #[test]
    fn test_history_moves_repeat_to_front() {
        let mut history = SearchHistory::default();
        history.add("hello");
        history.add("  what is pi ");
        history.add("");
        history.add("hello");
        assert_eq!(history.recent(10), ["hello", "what is pi"]);
        assert_eq!(history.recent(1), ["hello"]);
    }

    #[test]
    fn test_history_capacity() {
        let mut history = SearchHistory::new(3);
        for q in ["a", "b", "c", "d"] {
            history.add(q);
        }
        assert_eq!(history.recent(10), ["d", "c", "b"]);
        history.clear();
        assert!(history.recent(10).is_empty());
    }

    #[test]
    fn test_history_suggestions() {
        let mut history = SearchHistory::default();
        history.add("What is pi");
        history.add("what is git");
        history.add("hello");
        history.add("what");
        assert_eq!(history.suggestions("what"), vec!["what is git", "What is pi"]);
        assert!(history.suggestions("zzz").is_empty());
    }
}
