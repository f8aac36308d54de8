use std::io::Write;

use anyhow::Result;

use crate::state::AppState;

/// List catalog questions grouped by category.
pub fn sources(state: &AppState, limit: Option<usize>, out: &mut impl Write) -> Result<()> {
    let limit = limit.unwrap_or(20);

    if state.store.is_empty() {
        writeln!(out, "The answer catalog is empty.")?;
        return Ok(());
    }

    let groups = state.store.by_category();
    let mut output = format!(
        "Offline catalog: {} answers in {} categories\n\n",
        state.store.len(),
        groups.len()
    );
    for (category, records) in &groups {
        output.push_str(&format!("{} ({})\n", category, records.len()));
        for record in records.iter().take(limit) {
            output.push_str(&format!("  - {}\n", record.question));
        }
        if records.len() > limit {
            output.push_str(&format!("  ... and {} more\n", records.len() - limit));
        }
        output.push('\n');
    }

    write!(out, "{}", output)?;
    Ok(())
}
