//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// A single conversational turn (Entity)
///
/// Deliberately role-less: the wire protocol replays the whole history as a
/// flat sequence of text parts, so the store never needs to know which side
/// spoke. Speaker attribution is a display concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Append-only conversation history (Entity)
///
/// The only mutation is [`Conversation::append`]. Successful exchanges grow
/// the store by two messages (user turn, then model turn) in strict
/// alternation; failed or empty exchanges grow it by one.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn to the end of the history.
    pub fn append(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Owned copy of the full history, for handing to an outbound request
    /// without borrowing the store across an await.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
