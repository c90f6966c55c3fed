//! Header widget — application name, model, and request state

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a TuiState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (phase_text, phase_color) = if self.state.sending {
            ("Sending", Color::Yellow)
        } else {
            ("Ready", Color::Green)
        };

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "gemcat",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&self.state.model_name, Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(phase_text, Style::default().fg(phase_color)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Gemini Chat ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
