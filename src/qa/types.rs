use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source tag carried by every catalog record.
pub const OFFLINE_SOURCE: &str = "offline";

/// Category used when a supplementary record does not name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// A stored question/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub source: String,
    /// Relevance for the query that produced this copy, in [0, 1].
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(question: &str, answer: &str, category: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category.to_string(),
            source: OFFLINE_SOURCE.to_string(),
            score: 1.0,
            created_at,
        }
    }

    /// Pseudo-URL, e.g. `offline://greetings`.
    pub fn url(&self) -> String {
        format!("offline://{}", self.category.to_lowercase())
    }

    /// Display label, e.g. `Offline Answer - Greetings`.
    pub fn display_url(&self) -> String {
        format!("Offline Answer - {}", self.category)
    }

    pub(crate) fn with_score(&self, score: f64) -> Self {
        Self {
            score,
            ..self.clone()
        }
    }
}

/// JSON shape of a rendered result (record plus its derived URL fields).
#[derive(Debug, Clone, Serialize)]
pub struct AnswerView<'a> {
    pub title: &'a str,
    pub answer: &'a str,
    pub category: &'a str,
    pub url: String,
    pub display_url: String,
    pub source: &'a str,
    pub score: f64,
    pub timestamp: DateTime<Utc>,
}

impl<'a> From<&'a AnswerRecord> for AnswerView<'a> {
    fn from(record: &'a AnswerRecord) -> Self {
        Self {
            title: &record.question,
            answer: &record.answer,
            category: &record.category,
            url: record.url(),
            display_url: record.display_url(),
            source: &record.source,
            score: record.score,
            timestamp: record.created_at,
        }
    }
}

/// A supplementary record as it appears in a JSON data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub question: Option<serde_json::Value>,
    #[serde(default)]
    pub answer: Option<serde_json::Value>,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
}

impl RawEntry {
    /// Extract a `(question, answer, category)` triple, or `None` if the
    /// question or answer is missing, not a string, or blank.
    pub fn into_triple(self) -> Option<(String, String, String)> {
        let question = as_text(self.question)?;
        let answer = as_text(self.answer)?;
        if question.trim().is_empty() || answer.trim().is_empty() {
            return None;
        }
        let category = as_text(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        Some((question, answer, category))
    }
}

fn as_text(value: Option<serde_json::Value>) -> Option<String> {
    match value? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}
