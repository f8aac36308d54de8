use std::io::Write;

use anyhow::Result;

use crate::state::AppState;

/// Print the effective configuration.
pub fn config(state: &AppState, out: &mut impl Write) -> Result<()> {
    let config = &state.config;
    writeln!(
        out,
        "Configuration:\n  \
         data_dir: {}\n  \
         suggestion_limit: {}\n  \
         fallback_limit: {}\n  \
         history_size: {}\n  \
         log_level: {}\n  \
         entries loaded: {}",
        config.data_dir.display(),
        config.suggestion_limit,
        config.fallback_limit,
        config.history_size,
        config.log_level,
        state.store.len()
    )?;
    Ok(())
}
