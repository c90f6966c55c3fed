//! TUI state management
//!
//! Single source of truth for the render pass:
//! - [`TranscriptLine`]: one exchanged message with its speaker
//! - [`TuiState`]: transcript, input buffer, scroll position, in-flight flag
//!
//! The input cursor is a byte offset into the buffer. Every editing
//! method keeps it on a char boundary.

/// Spinner frames cycled in the status bar while a request is in flight.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    You,
    Bot,
}

impl Speaker {
    /// Prefix label shown in front of the message.
    pub fn label(&self) -> &'static str {
        match self {
            Self::You => "You",
            Self::Bot => "Bot",
        }
    }

    /// Prefix color in the transcript pane.
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::You => Color::Cyan,
            Self::Bot => Color::Green,
        }
    }
}

/// One entry in the transcript pane.
#[derive(Debug, Clone)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub content: String,
}

/// Mutable state behind the chat screen.
#[derive(Debug)]
pub struct TuiState {
    /// Messages shown in the transcript pane
    pub transcript: Vec<TranscriptLine>,
    /// Input buffer
    pub input: String,
    /// Cursor position in the input (byte offset)
    pub cursor_pos: usize,
    /// Lines scrolled up from the bottom of the transcript
    pub scroll_offset: usize,
    /// Follow new messages automatically
    pub auto_scroll: bool,
    /// A request is in flight; submissions are ignored until it settles
    pub sending: bool,
    /// Animation counter for the status bar spinner
    pub spinner_tick: usize,
    /// Model name shown in the header
    pub model_name: String,
    /// Exit the main loop at the top of the next iteration
    pub should_quit: bool,
}

impl TuiState {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            transcript: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            auto_scroll: true,
            sending: false,
            spinner_tick: 0,
            model_name: model_name.into(),
            should_quit: false,
        }
    }

    // === Input editing ===

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos -= prev;
            self.input.remove(self.cursor_pos);
        }
    }

    /// Move the cursor one character left.
    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos -= prev;
        }
    }

    /// Move the cursor one character right.
    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            let next = self.input[self.cursor_pos..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos += next;
        }
    }

    /// Move the cursor to the start of the input.
    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move the cursor to the end of the input.
    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    /// Take the input buffer, leaving it empty with the cursor at 0.
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    // === Transcript ===

    /// Append a transcript entry. Keeps the view pinned to the newest
    /// message unless the user has scrolled away.
    pub fn push_line(&mut self, speaker: Speaker, content: impl Into<String>) {
        self.transcript.push(TranscriptLine {
            speaker,
            content: content.into(),
        });
        if self.auto_scroll {
            self.scroll_offset = 0;
        }
    }

    // === Scrolling ===

    /// Scroll one line towards older messages and stop following.
    pub fn scroll_up(&mut self) {
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll one line towards newer messages. Reaching the bottom
    /// resumes following.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
        if self.scroll_offset == 0 {
            self.auto_scroll = true;
        }
    }

    /// Jump to the newest message and resume following.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.auto_scroll = true;
    }

    // === Spinner ===

    /// Advance the spinner animation by one frame.
    pub fn advance_spinner(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    /// Current spinner frame for the status bar.
    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }
}
