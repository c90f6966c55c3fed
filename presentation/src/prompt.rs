//! Interactive API key prompt
//!
//! Fallback for when no key is found in the environment. The prompt is
//! written to stderr so a piped stdout stays clean.

use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Ask for an API key on the terminal.
///
/// Returns `None` when the user enters a blank line.
pub fn prompt_api_key() -> io::Result<Option<String>> {
    eprintln!("{}", "No API key found in the environment.".yellow());
    eprint!("{} ", "Enter your Gemini API key:".cyan().bold());
    io::stderr().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let key = input.trim();
    if key.is_empty() {
        Ok(None)
    } else {
        Ok(Some(key.to_string()))
    }
}
