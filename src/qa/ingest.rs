use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use super::types::{RawEntry, DEFAULT_CATEGORY};
use super::StoreBuilder;

const UTF8_BOM: &str = "\u{feff}";

/// `(question, answer, category)` parsed from a data file.
pub type Triple = (String, String, String);

/// Load every `*.json` then every `*.csv` file in `dir` into `builder`.
///
/// A missing directory, an unreadable file or an unparsable document is
/// logged and skipped. Returns the number of records accepted.
pub fn load_dir(builder: &mut StoreBuilder, dir: &Path) -> usize {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "No data directory, using built-in catalog only");
        return 0;
    }

    let (json_files, csv_files) = match list_data_files(dir) {
        Ok(files) => files,
        Err(e) => {
            warn!("Failed to list data directory: {:#}", e);
            return 0;
        }
    };

    let mut added = 0;
    for path in &json_files {
        match read_json_file(path) {
            Ok(triples) => added += add_all(builder, path, triples),
            Err(e) => warn!("Skipping data file: {:#}", e),
        }
    }
    for path in &csv_files {
        match fs::read_to_string(path).with_context(|| format!("read {}", path.display())) {
            Ok(text) => added += add_all(builder, path, parse_csv(&text)),
            Err(e) => warn!("Skipping data file: {:#}", e),
        }
    }

    info!(
        dir = %dir.display(),
        json_files = json_files.len(),
        csv_files = csv_files.len(),
        added,
        "Supplementary data loaded"
    );
    added
}

fn add_all(builder: &mut StoreBuilder, path: &Path, triples: Vec<Triple>) -> usize {
    let before = builder.len();
    for (question, answer, category) in &triples {
        builder.add_qa(question, answer, category);
    }
    let added = builder.len() - before;
    debug!(file = %path.display(), parsed = triples.len(), added, "data file loaded");
    added
}

/// JSON and CSV files directly inside `dir`, each list sorted by path.
fn list_data_files(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut json_files = Vec::new();
    let mut csv_files = Vec::new();

    let entries = fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))?;
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Error reading data directory entry: {}", e);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => json_files.push(path),
            Some("csv") => csv_files.push(path),
            _ => {}
        }
    }

    json_files.sort();
    csv_files.sort();
    Ok((json_files, csv_files))
}

fn read_json_file(path: &Path) -> Result<Vec<Triple>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    parse_json(&bytes).with_context(|| format!("parse {}", path.display()))
}

/// Accepts a top-level array of records or an object with an `items` array.
/// Records that are not objects, or lack a usable question/answer, are dropped.
pub fn parse_json(bytes: &[u8]) -> Result<Vec<Triple>> {
    let bytes = bytes.strip_prefix(UTF8_BOM.as_bytes()).unwrap_or(bytes);
    let doc: serde_json::Value = serde_json::from_slice(bytes).context("invalid JSON")?;

    let items = match doc {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut root) => match root.remove("items") {
            Some(serde_json::Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    Ok(items
        .into_iter()
        .filter(|v| v.is_object())
        .filter_map(|v| serde_json::from_value::<RawEntry>(v).ok())
        .filter_map(RawEntry::into_triple)
        .collect())
}

/// `question,answer[,category]` per line. Every comma splits, so fields
/// cannot contain commas; anything after the third field is ignored.
pub fn parse_csv(text: &str) -> Vec<Triple> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() < 2 {
                return None;
            }
            let (question, answer) = (parts[0], parts[1]);
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            let category = parts.get(2).copied().unwrap_or(DEFAULT_CATEGORY);
            Some((question.to_string(), answer.to_string(), category.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qa::AnswerStore;

    fn triple(q: &str, a: &str, c: &str) -> Triple {
        (q.to_string(), a.to_string(), c.to_string())
    }

    #[test]
    fn test_parse_json_array() {
        let json = br#"[
            {"question": "what is rust", "answer": "A systems language.", "category": "Programming"},
            {"question": "what is cargo", "answer": "Rust's build tool."}
        ]"#;
        assert_eq!(
            parse_json(json).unwrap(),
            vec![
                triple("what is rust", "A systems language.", "Programming"),
                triple("what is cargo", "Rust's build tool.", "General"),
            ]
        );
    }

    #[test]
    fn test_parse_json_items_object() {
        let json = br#"{"version": 2, "items": [
            "not an object",
            {"question": "", "answer": "orphan"},
            {"question": "what is tokio", "answer": "An async runtime.", "category": "Programming"}
        ]}"#;
        assert_eq!(
            parse_json(json).unwrap(),
            vec![triple("what is tokio", "An async runtime.", "Programming")]
        );
    }

    #[test]
    fn test_parse_json_without_items() {
        assert!(parse_json(br#"{"entries": []}"#).unwrap().is_empty());
        assert!(parse_json(b"42").unwrap().is_empty());
        assert!(parse_json(b"{not json").is_err());
    }

    #[test]
    fn test_parse_csv() {
        let csv = "what is a crab, A crustacean. , Animals\n\
                   \n\
                   no answer here\n\
                   ,missing question\n\
                   what is a lobster,Another crustacean.\n\
                   a,b,c,extra\n";
        assert_eq!(
            parse_csv(csv),
            vec![
                triple("what is a crab", "A crustacean.", "Animals"),
                triple("what is a lobster", "Another crustacean.", "General"),
                triple("a", "b", "c"),
            ]
        );
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let json = "\u{feff}[{\"question\": \"what is a bom\", \"answer\": \"Byte order mark\"}]";
        assert_eq!(
            parse_json(json.as_bytes()).unwrap(),
            vec![triple("what is a bom", "Byte order mark", "General")]
        );

        let csv = "\u{feff}what is a bom,Byte order mark,Tech\n";
        assert_eq!(
            parse_csv(csv),
            vec![triple("what is a bom", "Byte order mark", "Tech")]
        );
    }

    #[test]
    fn test_load_dir_with_byte_order_marks() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bom.json"),
            "\u{feff}{\"items\": [{\"question\": \"what is utf-8\", \"answer\": \"A text encoding.\"}]}",
        )
        .unwrap();
        fs::write(dir.path().join("bom.csv"), "\u{feff}what is a bom,Byte order mark,Tech\n").unwrap();

        let store = AnswerStore::new(dir.path());
        for question in ["what is a bom", "what is utf-8"] {
            let answer = store.get_answer(question).unwrap();
            assert_eq!(answer.question, question);
            assert_eq!(answer.score, 1.0);
        }
    }

    #[test]
    fn test_load_dir_missing_is_not_an_error() {
        let mut builder = AnswerStore::builder();
        assert_eq!(load_dir(&mut builder, Path::new("/nonexistent/quickanswer")), 0);
        assert_eq!(builder.len(), 0);
    }

    #[test]
    fn test_load_dir_skips_malformed_records() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("extra.json"),
            r#"[
                {"question": "", "answer": "dropped"},
                {"question": "what is ferris", "answer": "The Rust mascot.", "category": "Programming"}
            ]"#,
        )
        .unwrap();
        fs::write(dir.path().join("broken.json"), "[{").unwrap();
        fs::write(
            dir.path().join("extra.csv"),
            ",empty question\nwhat is clippy,A Rust linter.,Programming\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "what is ignored,yes").unwrap();

        let mut builder = AnswerStore::builder();
        assert_eq!(load_dir(&mut builder, dir.path()), 2);
        let store = builder.build();

        let questions: Vec<&str> = store
            .all_answers()
            .iter()
            .map(|r| r.question.as_str())
            .collect();
        assert_eq!(questions, vec!["what is ferris", "what is clippy"]);
        assert!(store.all_answers().iter().all(|r| r.answer != "dropped"));
        assert!(!store.has_answer("what is ignored"));
    }

    #[test]
    fn test_load_dir_does_not_override_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("greetings.csv"), "Hello,Overridden!,Other\n").unwrap();

        let store = AnswerStore::new(dir.path());
        let hello = store.get_answer("hello").unwrap();
        assert_eq!(hello.category, "Greetings");
        assert_ne!(hello.answer, "Overridden!");
    }
}
