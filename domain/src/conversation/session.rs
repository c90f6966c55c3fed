//! Chat session entity and its send phase

use crate::conversation::entities::Conversation;
use crate::conversation::reply::SendOutcome;

/// Where the session is in the send lifecycle (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    Sending,
}

impl SessionPhase {
    pub fn is_sending(&self) -> bool {
        matches!(self, SessionPhase::Sending)
    }
}

/// A chat session (Entity)
///
/// Owns the conversation history and enforces the single-flight rule: while
/// one request is pending, further submissions are rejected and leave the
/// history untouched.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    conversation: Conversation,
    phase: SessionPhase,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Record the user's turn and enter [`SessionPhase::Sending`].
    ///
    /// Returns `false` without touching the history when a send is already
    /// in flight.
    pub fn begin_send(&mut self, content: impl Into<String>) -> bool {
        if self.phase.is_sending() {
            return false;
        }
        self.conversation.append(content);
        self.phase = SessionPhase::Sending;
        true
    }

    /// Resolve the pending send.
    ///
    /// A delivered reply is appended to the history; empty results and
    /// failures are not. The phase returns to [`SessionPhase::Idle`] in
    /// every case, as the final step.
    pub fn complete_send(&mut self, outcome: &SendOutcome) {
        if let SendOutcome::Delivered(text) = outcome {
            self.conversation.append(text.clone());
        }
        self.phase = SessionPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_send_records_turn_and_enters_sending() {
        let mut session = ChatSession::new();

        assert!(session.begin_send("Hello"));
        assert_eq!(session.phase(), SessionPhase::Sending);
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation().messages()[0].content, "Hello");
    }

    #[test]
    fn test_begin_send_rejected_while_sending() {
        let mut session = ChatSession::new();
        session.begin_send("first");

        assert!(!session.begin_send("second"));
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.phase(), SessionPhase::Sending);
    }

    #[test]
    fn test_delivered_reply_is_recorded() {
        let mut session = ChatSession::new();
        session.begin_send("question");
        session.complete_send(&SendOutcome::Delivered("answer".to_string()));

        assert_eq!(session.phase(), SessionPhase::Idle);
        let contents: Vec<&str> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(contents, vec!["question", "answer"]);
    }

    #[test]
    fn test_failure_returns_to_idle_without_recording() {
        let mut session = ChatSession::new();
        session.begin_send("question");
        session.complete_send(&SendOutcome::Failed("Network error: refused".to_string()));

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.conversation().len(), 1);
        assert!(session.begin_send("again"));
    }

    #[test]
    fn test_empty_result_returns_to_idle_without_recording() {
        let mut session = ChatSession::new();
        session.begin_send("question");
        session.complete_send(&SendOutcome::EmptyResult);

        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.conversation().len(), 1);
    }

    #[test]
    fn test_successful_exchanges_alternate() {
        let mut session = ChatSession::new();
        for round in 0..3 {
            session.begin_send(format!("user {round}"));
            session.complete_send(&SendOutcome::Delivered(format!("model {round}")));
        }

        let messages = session.conversation().messages();
        assert_eq!(messages.len(), 6);
        for (i, message) in messages.iter().enumerate() {
            let side = if i % 2 == 0 { "user" } else { "model" };
            assert!(message.content.starts_with(side));
        }
    }
}
