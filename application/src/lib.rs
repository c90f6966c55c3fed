//! Application layer for gemcat
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_event::{ChatCommand, ChatEvent},
    chat_gateway::{ChatGateway, GatewayError},
};
pub use use_cases::chat_controller::ChatController;
