use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use super::ask::{ask, render_answer};
use super::suggest::suggest;
use crate::state::AppState;

const PROMPT: &str = "quickanswer> ";

const HELP: &str = "Type a question and press Enter.\n\
  :back            previous answer\n\
  :forward         next answer\n\
  :current         answer being shown\n\
  :open <n>        show result n of the last query\n\
  :history         recent queries\n\
  :clear           forget recent queries\n\
  :suggest <text>  matching questions\n\
  :help            this text\n\
  :quit            exit\n";

/// One line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ReplCommand {
    Query(String),
    Back,
    Forward,
    Current,
    /// 1-based index into the last results; `None` when missing or not a number.
    Open(Option<usize>),
    History,
    Clear,
    Suggest(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return ReplCommand::Empty;
        }
        let Some(rest) = line.strip_prefix(':') else {
            return ReplCommand::Query(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "back" | "b" => ReplCommand::Back,
            "forward" | "f" => ReplCommand::Forward,
            "current" | "c" => ReplCommand::Current,
            "open" | "o" => ReplCommand::Open(arg.parse().ok().filter(|n| *n > 0)),
            "history" => ReplCommand::History,
            "clear" => ReplCommand::Clear,
            "suggest" | "s" => ReplCommand::Suggest(arg.to_string()),
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(name.to_string()),
        }
    }
}

/// Read commands from `input` until EOF or `:quit`.
pub fn run(state: &mut AppState, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{} offline answers loaded. Type :help for commands.",
        state.store.len()
    )?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line.context("Failed to read input")?;

        let command = ReplCommand::parse(&line);
        debug!(?command, "repl command");
        match command {
            ReplCommand::Query(query) => ask(state, &query, false, out)?,
            ReplCommand::Back => match state.navigation.back() {
                Some(record) => write!(out, "{}", render_answer(record))?,
                None => writeln!(out, "Nothing to go back to.")?,
            },
            ReplCommand::Forward => match state.navigation.forward() {
                Some(record) => write!(out, "{}", render_answer(record))?,
                None => writeln!(out, "Nothing to go forward to.")?,
            },
            ReplCommand::Current => match state.navigation.current() {
                Some(record) => {
                    write!(out, "{}", render_answer(record))?;
                    writeln!(out, "({} answers visited)", state.navigation.len())?;
                }
                None => writeln!(out, "Nothing shown yet.")?,
            },
            ReplCommand::Open(None) => writeln!(out, "Usage: :open <n>")?,
            ReplCommand::Open(Some(n)) => match state.last_results.get(n - 1) {
                Some(record) => {
                    write!(out, "{}", render_answer(record))?;
                    state.navigation.navigate(record.clone());
                }
                None => writeln!(
                    out,
                    "No result {} (the last query returned {}).",
                    n,
                    state.last_results.len()
                )?,
            },
            ReplCommand::History => {
                let recent = state.history.recent(20);
                if recent.is_empty() {
                    writeln!(out, "No recent searches.")?;
                } else {
                    writeln!(out, "Recent searches:")?;
                    for query in recent {
                        writeln!(out, "  {}", query)?;
                    }
                }
            }
            ReplCommand::Clear => {
                state.history.clear();
                writeln!(out, "Search history cleared.")?;
            }
            ReplCommand::Suggest(partial) => suggest(state, &partial, None, false, out)?,
            ReplCommand::Help => write!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
            ReplCommand::Empty => writeln!(out, "Please enter a search query.")?,
            ReplCommand::Unknown(name) => {
                writeln!(out, "Unknown command ':{}'. Type :help for commands.", name)?
            }
        }
    }
    Ok(())
}
