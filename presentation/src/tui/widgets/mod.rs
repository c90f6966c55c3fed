//! TUI widgets — ratatui components for the chat screen
//!
//! Layout:
//! ┌── Header (3) ────────────────────────────────────┐
//! ├── Transcript (fill) ─────────────────────────────┤
//! ├── Input (3) ─────────────────────────────────────┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod header;
pub mod input;
pub mod status_bar;
pub mod transcript;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions for one render pass.
pub struct MainLayout {
    pub header: Rect,
    pub transcript: Rect,
    pub input: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Split the terminal area into the four rows of the chat screen.
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: vertical[0],
            transcript: vertical[1],
            input: vertical[2],
            status_bar: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_gives_transcript_the_remaining_rows() {
        let layout = MainLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.transcript.height, 17);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.status_bar.height, 1);
    }
}
