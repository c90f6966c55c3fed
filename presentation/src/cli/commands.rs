//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for gemcat
#[derive(Parser, Debug)]
#[command(name = "gemcat")]
#[command(version, about = "Terminal chat client for the Gemini API")]
#[command(long_about = r#"
Gemcat opens a full-screen terminal chat session against the Gemini API.

Every turn sends the whole conversation so far, so the model keeps
context across messages. One request is in flight at a time; the input
line stays editable while you wait.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./gemcat.toml       Project-level config
3. ~/.config/gemcat/config.toml   Global config

The API key is read from the GEMINI_API_KEY environment variable, with
an interactive prompt as a fallback.

Example:
  gemcat
  gemcat -m gemini-2.0-flash
  gemcat --config ./work.toml -vv
"#)]
pub struct Cli {
    /// Model to chat with (overrides the config file)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
