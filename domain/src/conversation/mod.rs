//! Conversation domain.
//!
//! - [`entities::Conversation`] — append-only store of message turns
//! - [`entities::Message`] — a single turn's text
//! - [`session::ChatSession`] — conversation plus the single-flight send phase
//! - [`reply::ModelReply`] — what the model sent back
//! - [`reply::SendOutcome`] — terminal result of one send

pub mod entities;
pub mod reply;
pub mod session;
