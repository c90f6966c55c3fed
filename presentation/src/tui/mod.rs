//! Terminal chat interface built on ratatui
//!
//! Module map:
//! - [`app`]: terminal lifecycle and the main select! loop
//! - [`keys`]: modeless key bindings
//! - [`state`]: everything the render pass reads
//! - [`widgets`]: the four screen regions

mod app;
mod keys;
mod state;
mod widgets;

pub use app::ChatApp;
pub use keys::{Action, map_key};
pub use state::{Speaker, TranscriptLine, TuiState};
