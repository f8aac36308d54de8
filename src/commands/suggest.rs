use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct SuggestOutput<'a> {
    partial: &'a str,
    questions: Vec<String>,
    recent: Vec<String>,
}

/// Catalog questions containing `partial`, plus earlier queries starting with it.
pub fn suggest(
    state: &AppState,
    partial: &str,
    limit: Option<usize>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let limit = limit.unwrap_or(state.config.suggestion_limit);
    let output = SuggestOutput {
        partial,
        questions: state.store.suggestions(partial, limit),
        recent: if partial.trim().is_empty() {
            Vec::new()
        } else {
            state.history.suggestions(partial.trim())
        },
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    if output.questions.is_empty() && output.recent.is_empty() {
        writeln!(out, "No suggestions for '{}'", partial)?;
        return Ok(());
    }
    for question in &output.questions {
        writeln!(out, "  {}", question)?;
    }
    if !output.recent.is_empty() {
        writeln!(out, "Recent:")?;
        for query in &output.recent {
            writeln!(out, "  {}", query)?;
        }
    }
    Ok(())
}
