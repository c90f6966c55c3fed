//! Main TUI application — terminal lifecycle and event loop
//!
//! Data flow:
//!
//!   ChatApp::run() select! loop
//!   ├─ crossterm EventStream ──► map_key ──► handle_action ──► cmd_tx
//!   ├─ event_rx.recv() ────────► apply_chat_event ──► TuiState
//!   └─ tick_interval ──────────► spinner animation
//!
//! The controller runs on its own task and owns the conversation; the
//! TUI only renders state and forwards commands.

use super::keys::{Action, map_key};
use super::state::{Speaker, TuiState};
use super::widgets::{
    MainLayout, header::HeaderWidget, input::InputWidget, status_bar::StatusBarWidget,
    transcript::TranscriptWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use gemcat_application::{ChatCommand, ChatController, ChatEvent, ChatGateway};
use gemcat_domain::Model;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Full-screen chat interface.
pub struct ChatApp {
    cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    event_rx: mpsc::UnboundedReceiver<ChatEvent>,
    cancellation_token: CancellationToken,
    controller_handle: JoinHandle<()>,
    model_name: String,
}

impl ChatApp {
    /// Spawn the controller task and wire the UI channels to it.
    pub fn new(gateway: Arc<dyn ChatGateway>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let cancellation_token = CancellationToken::new();

        let controller = ChatController::new(
            gateway,
            event_tx,
            cmd_tx.clone(),
            cancellation_token.clone(),
        );
        let controller_handle = tokio::spawn(controller.run(cmd_rx));

        Self {
            cmd_tx,
            event_rx,
            cancellation_token,
            controller_handle,
            model_name: Model::default().to_string(),
        }
    }

    /// Set the model name shown in the header.
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Run the TUI main loop.
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = TuiState::new(self.model_name.clone());
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame, &state);
            })?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Events from the controller task
                Some(event) = self.event_rx.recv() => {
                    self.apply_chat_event(&mut state, event);
                }

                // Tick for spinner animation
                _ = tick.tick() => {
                    if state.sending {
                        state.advance_spinner();
                    }
                }
            }
        }

        // Stop the controller, then restore the terminal
        self.cancellation_token.cancel();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        let _ = (&mut self.controller_handle).await;

        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(TranscriptWidget::new(state), layout.transcript);
        frame.render_widget(InputWidget::new(state), layout.input);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }

    fn handle_terminal_event(&mut self, state: &mut TuiState, event: Event) {
        if let Event::Key(key) = event {
            if let Some(action) = map_key(key) {
                self.handle_action(state, action);
            }
        }
    }

    fn handle_action(&mut self, state: &mut TuiState, action: Action) {
        match action {
            Action::Quit => state.should_quit = true,
            Action::Submit => self.submit_input(state),
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorHome => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),
            Action::ScrollUp => state.scroll_up(),
            Action::ScrollDown => state.scroll_down(),
            Action::ScrollToBottom => state.scroll_to_bottom(),
        }
    }

    /// Hand the input buffer to the controller as one user turn.
    ///
    /// The controller is the authority on the one-request rule; the flag
    /// set here only closes the window between this submit and the
    /// `SendStarted` round trip.
    fn submit_input(&mut self, state: &mut TuiState) {
        if state.sending {
            return;
        }

        let content = state.take_input();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return;
        }

        state.push_line(Speaker::You, trimmed);
        state.sending = true;
        let _ = self.cmd_tx.send(ChatCommand::Submit(trimmed.to_string()));
    }

    /// Fold a controller event into the render state.
    fn apply_chat_event(&mut self, state: &mut TuiState, event: ChatEvent) {
        match event {
            ChatEvent::SendStarted => state.sending = true,
            ChatEvent::BotMessage(text) => state.push_line(Speaker::Bot, text),
            ChatEvent::SendFinished => {
                state.sending = false;
                state.spinner_tick = 0;
            }
        }
    }
}
