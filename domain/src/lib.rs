//! Domain layer for gemcat
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Conversation
//!
//! An append-only store of conversational turns. Messages are only ever
//! appended; nothing is edited or removed. The store does not record which
//! side produced a message, because the wire format replays the full history
//! as one undifferentiated sequence. Display layers track speakers on their
//! own.
//!
//! ## ChatSession
//!
//! A conversation plus its send phase. At most one request is in flight at a
//! time; a submission made while a send is pending is rejected without side
//! effects.

pub mod conversation;
pub mod core;
pub mod util;

// Re-export commonly used types
pub use conversation::{
    entities::{Conversation, Message},
    reply::{EMPTY_REPLY_FALLBACK, ModelReply, SendOutcome},
    session::{ChatSession, SessionPhase},
};
pub use core::{
    generation::GenerationParams,
    model::Model,
    validation::{ConfigIssue, Severity},
};
