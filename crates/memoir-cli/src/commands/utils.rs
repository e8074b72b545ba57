//! Small shared helpers for the CLI commands.

use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Puts a yes/no question to the user and reads the decision from stdin.
///
/// Anything other than `y`/`yes` (case-insensitive) counts as no.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Today's date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
