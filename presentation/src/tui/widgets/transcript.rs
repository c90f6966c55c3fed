//! Transcript widget — scrollable message history

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Continuation indent, aligned under the first content column.
const INDENT: &str = "     ";

pub struct TranscriptWidget<'a> {
    state: &'a TuiState,
}

impl<'a> TranscriptWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn format_messages(&self) -> Text<'_> {
        let mut lines: Vec<Line> = Vec::new();

        for entry in &self.state.transcript {
            let prefix_style = Style::default()
                .fg(entry.speaker.color())
                .add_modifier(Modifier::BOLD);

            let mut content_lines = entry.content.lines();
            let first = content_lines.next().unwrap_or("");
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", entry.speaker.label()), prefix_style),
                Span::raw(first.to_string()),
            ]));
            for content_line in content_lines {
                lines.push(Line::from(format!("{}{}", INDENT, content_line)));
            }
        }

        Text::from(lines)
    }
}

impl<'a> Widget for TranscriptWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.format_messages();
        let visible_height = area.height.saturating_sub(2); // borders
        let content_width = area.width.saturating_sub(2); // borders

        // Use Paragraph's own line_count() which uses WordWrapper internally,
        // matching the exact wrapping algorithm used during rendering.
        // Built without block so line_count returns pure content lines.
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let total_lines = paragraph.line_count(content_width) as u16;

        // Calculate scroll: scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = (self.state.scroll_offset as u16).min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Speaker;

    fn render_to_buffer(state: &TuiState, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        TranscriptWidget::new(state).render(area, &mut buf);
        buf
    }

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
    fn test_renders_speaker_prefix_on_first_line() {
        let mut state = TuiState::new("test-model");
        state.push_line(Speaker::You, "hello");
        state.push_line(Speaker::Bot, "world");

        let text = buffer_text(&render_to_buffer(&state, 40, 10));
        assert!(text.contains("You: hello"));
        assert!(text.contains("Bot: world"));
    }

    #[test]
    fn test_multiline_content_is_indented() {
        let mut state = TuiState::new("test-model");
        state.push_line(Speaker::Bot, "first\nsecond");

        let text = buffer_text(&render_to_buffer(&state, 40, 10));
        assert!(text.contains("Bot: first"));
        assert!(text.contains("     second"));
    }

    #[test]
    fn test_pinned_view_shows_newest_message() {
        let mut state = TuiState::new("test-model");
        for i in 0..30 {
            state.push_line(Speaker::You, format!("message {}", i));
        }

        let text = buffer_text(&render_to_buffer(&state, 40, 10));
        assert!(text.contains("message 29"));
        assert!(!text.contains("message 0 "));
    }

    #[test]
    fn test_scrolled_view_shows_older_messages() {
        let mut state = TuiState::new("test-model");
        for i in 0..30 {
            state.push_line(Speaker::You, format!("message {}", i));
        }
        for _ in 0..10 {
            state.scroll_up();
        }

        let text = buffer_text(&render_to_buffer(&state, 40, 10));
        assert!(!text.contains("message 29"));
    }
}
