//! Chat controller
//!
//! Owns the chat session and enforces the send lifecycle: one request in
//! flight at a time, submissions during a pending send dropped without side
//! effects. Runs as a background task; the presentation layer talks to it
//! over channels and never touches the session directly.

use std::sync::Arc;

use gemcat_domain::util::preview;
use gemcat_domain::{ChatSession, ModelReply, SendOutcome};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::ports::chat_event::{ChatCommand, ChatEvent};
use crate::ports::chat_gateway::{ChatGateway, GatewayError};

/// Controller task driving a single chat session
///
/// Submissions arrive as [`ChatCommand::Submit`]. Each accepted submission
/// snapshots the history, spawns a request task, and keeps processing its
/// mailbox; the request task posts [`ChatCommand::Completed`] back when the
/// gateway resolves. Every accepted send resolves the session to idle
/// exactly once, whatever the gateway returned.
pub struct ChatController {
    session: ChatSession,
    gateway: Arc<dyn ChatGateway>,
    /// Channel sender for events to the presentation layer
    tx: mpsc::UnboundedSender<ChatEvent>,
    /// Own mailbox sender, cloned into spawned request tasks
    cmd_tx: mpsc::UnboundedSender<ChatCommand>,
    /// Cancellation token for graceful shutdown
    cancellation_token: CancellationToken,
}

impl ChatController {
    pub fn new(
        gateway: Arc<dyn ChatGateway>,
        tx: mpsc::UnboundedSender<ChatEvent>,
        cmd_tx: mpsc::UnboundedSender<ChatCommand>,
        cancellation_token: CancellationToken,
    ) -> Self {
        Self {
            session: ChatSession::new(),
            gateway,
            tx,
            cmd_tx,
            cancellation_token,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Process commands until the mailbox closes or shutdown is requested.
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<ChatCommand>) {
        loop {
            tokio::select! {
                _ = self.cancellation_token.cancelled() => {
                    debug!("Chat controller shutting down");
                    break;
                }
                cmd = cmd_rx.recv() => match cmd {
                    Some(ChatCommand::Submit(text)) => self.handle_submit(text),
                    Some(ChatCommand::Completed(result)) => self.handle_completion(result),
                    None => break,
                },
            }
        }
    }

    /// Accept or drop one submission.
    ///
    /// Blank input and input arriving while a request is pending are both
    /// dropped silently; the store is only touched when a send actually
    /// starts.
    fn handle_submit(&mut self, text: String) {
        let content = text.trim();
        if content.is_empty() {
            return;
        }
        if !self.session.begin_send(content) {
            debug!("Dropping submission while a request is in flight");
            return;
        }

        let history = self.session.conversation().snapshot();
        info!("Dispatching request with {} message(s)", history.len());
        debug!("User turn: {}", preview(content, 80));
        let _ = self.tx.send(ChatEvent::SendStarted);

        let gateway = Arc::clone(&self.gateway);
        let cmd_tx = self.cmd_tx.clone();
        let cancellation_token = self.cancellation_token.clone();
        tokio::spawn(async move {
            let result = tokio::select! {
                _ = cancellation_token.cancelled() => {
                    Err(GatewayError::Unexpected("request cancelled".to_string()))
                }
                result = gateway.generate(&history) => result,
            };
            // Mailbox may already be gone during shutdown
            let _ = cmd_tx.send(ChatCommand::Completed(result));
        });
    }

    /// Resolve the pending send and report it to the front end.
    fn handle_completion(&mut self, result: Result<ModelReply, GatewayError>) {
        let outcome = match result {
            Ok(ModelReply::Text(text)) => {
                debug!("Model turn: {}", preview(&text, 80));
                SendOutcome::Delivered(text)
            }
            Ok(ModelReply::Empty) => {
                info!("Service returned no candidates");
                SendOutcome::EmptyResult
            }
            Err(err) => {
                warn!("Send failed: {err}");
                SendOutcome::Failed(err.to_string())
            }
        };

        let line = outcome.display_text().to_string();
        self.session.complete_send(&outcome);
        let _ = self.tx.send(ChatEvent::BotMessage(line));
        let _ = self.tx.send(ChatEvent::SendFinished);
    }
}
