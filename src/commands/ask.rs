use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::qa::types::{AnswerRecord, AnswerView};
use crate::resolver;
use crate::state::AppState;

/// Resolve `query`, print the results and push the top one onto the
/// navigation list. The results stay in `state` for `:open`.
pub fn ask(state: &mut AppState, query: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        writeln!(out, "Please enter a search query.")?;
        return Ok(());
    }

    state.history.add(query);
    let results = resolver::resolve(&state.store, query, &state.resolve_options);
    info!(query, results = results.len(), "Offline lookup complete");

    if json {
        let views: Vec<AnswerView> = results.iter().map(AnswerView::from).collect();
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_results(query, &results))?;
    }

    if let Some(top) = results.first() {
        state.navigation.navigate(top.clone());
    }
    state.last_results = results;
    Ok(())
}

/// Status line, the first result in full, then the rest as a numbered list.
pub fn render_results(query: &str, results: &[AnswerRecord]) -> String {
    let mut full = match results.len() {
        0 => format!("No results found for '{}'\n", query),
        1 => format!("Found 1 result for '{}'\n", query),
        n => format!("Found {} results for '{}'\n", n, query),
    };

    let Some((first, rest)) = results.split_first() else {
        return full;
    };
    full.push('\n');
    full.push_str(&render_answer(first));

    if !rest.is_empty() {
        full.push_str("\nRelated:\n");
        for (i, record) in rest.iter().enumerate() {
            full.push_str(&format!(
                "  {:>2}. {} ({}, score {:.2})\n",
                i + 2,
                record.question,
                record.display_url(),
                record.score
            ));
        }
    }
    full
}

pub fn render_answer(record: &AnswerRecord) -> String {
    format!(
        "{}\n{} — {}\n{} | score {:.2}\n\n{}\n",
        record.question,
        record.url(),
        record.question,
        record.display_url(),
        record.score,
        record.answer
    )
}
