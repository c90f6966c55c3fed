//! Presentation layer for gemcat
//!
//! This crate contains the CLI definitions, the interactive API key
//! prompt, and the full-screen terminal chat interface.

pub mod cli;
pub mod prompt;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use prompt::prompt_api_key;
pub use tui::ChatApp;
