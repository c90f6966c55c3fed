//! Status bar widget — request state chip + key hints

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: request state chip
        let (chip_text, chip_color) = if self.state.sending {
            (
                format!(" {} SENDING ", self.state.spinner_frame()),
                Color::Yellow,
            )
        } else {
            (" READY ".to_string(), Color::Green)
        };
        let chip_style = Style::default()
            .fg(Color::Black)
            .bg(chip_color)
            .add_modifier(Modifier::BOLD);

        let chip_width = chip_text.chars().count() as u16;
        let chip_line = Line::from(Span::styled(chip_text, chip_style));
        buf.set_line(area.x, area.y, &chip_line, chip_width);

        // Right: key hints, right-aligned
        let hints = "Enter:send  ↑/↓:scroll  Ctrl+C:quit";
        let hint_width = hints.chars().count() as u16;
        let hint_x = area.right().saturating_sub(hint_width + 1);
        if hint_x > area.x + chip_width {
            let hint_line = Line::from(Span::styled(
                hints,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(hint_x, area.y, &hint_line, hint_width + 1);
        }
    }
}
