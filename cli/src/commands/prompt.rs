//! Interactive action prompt used when no subcommand is given.

use std::io::{BufRead, IsTerminal as _};

use anyhow::{Context, Result};

use crate::app::AppContext;
use crate::commands::lifecycle;
use crate::domain::Action;

const PROMPT: &str = "Enter action (start/stop)";

/// Ask for an action and run it.
///
/// An unrecognised answer is reported and the run ends without any provider
/// calls.
///
/// # Errors
///
/// Returns an error if the answer cannot be read from the terminal or stdin.
pub async fn run(app: &AppContext) -> Result<()> {
    app.output.info("Choose an action: 'start' or 'stop'.");
    let answer = if std::io::stdin().is_terminal() {
        dialoguer::Input::<String>::new()
            .with_prompt(PROMPT)
            .allow_empty(true)
            .interact_text()
            .context("reading action")?
    } else {
        read_answer(&mut std::io::stdin().lock())?
    };

    match Action::from_prompt(&answer) {
        Ok(action) => lifecycle::run(app, action).await,
        Err(e) => {
            app.output.error(&e.to_string());
            Ok(())
        }
    }
}

/// Read one line from a non-interactive stdin.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_answer(reader: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).context("reading action")?;
    Ok(line)
}
