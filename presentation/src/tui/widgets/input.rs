//! Input widget — single-line prompt with a block cursor
//!
//! Input longer than the pane scrolls horizontally so the cursor stays
//! visible. The border color tracks the request state: green while
//! idle, yellow while a request is in flight.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    state: &'a TuiState,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.state.sending {
            Color::Yellow
        } else {
            Color::Green
        };

        let prompt_span = Span::styled(
            PROMPT,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        );
        let cursor_style = Style::default().fg(Color::Black).bg(accent);

        let text = &self.state.input;
        let cursor_pos = self.state.cursor_pos;
        let before = &text[..cursor_pos];
        let after = &text[cursor_pos..];

        let mut spans: Vec<Span> = vec![prompt_span];
        spans.push(Span::raw(before.to_string()));

        if after.is_empty() {
            // Cursor at end of line — show block cursor on a space
            spans.push(Span::styled(" ", cursor_style));
        } else {
            // Cursor on a character
            let ch_len = after
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(after.len());
            spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
            if ch_len < after.len() {
                spans.push(Span::raw(after[ch_len..].to_string()));
            }
        }

        // Horizontal scroll keeps the cursor column inside the pane
        let inner_width = area.width.saturating_sub(2) as usize; // borders
        let cursor_col = PROMPT.len() + before.chars().count();
        let x_scroll = (cursor_col + 1).saturating_sub(inner_width) as u16;

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .style(Style::default().fg(accent));

        Paragraph::new(Line::from(spans))
            .block(block)
            .scroll((0, x_scroll))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_prompt_and_input() {
        let mut state = TuiState::new("test-model");
        for c in "hello".chars() {
            state.insert_char(c);
        }

        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&state).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("> hello"));
    }

    #[test]
    fn test_long_input_scrolls_to_keep_cursor_visible() {
        let mut state = TuiState::new("test-model");
        for c in "abcdefghijklmnopqrstuvwxyz".chars() {
            state.insert_char(c);
        }

        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new(&state).render(area, &mut buf);

        // The tail of the input is visible, the head scrolled off
        let text = buffer_text(&buf);
        assert!(text.contains('z'));
        assert!(!text.contains('a'));
    }
}
