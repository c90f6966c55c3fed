//! Chat gateway port
//!
//! Defines the interface for talking to the text-generation service.

use async_trait::async_trait;
use gemcat_domain::{Message, ModelReply};
use thiserror::Error;

/// Errors that can occur while generating a reply
///
/// The display strings are shown verbatim in the transcript, so they stay
/// short and stable.
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    /// Transport failure or a non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body that was not valid JSON. The decode detail rides in
    /// the variant for diagnostics; the display string stays fixed.
    #[error("Error decoding API response")]
    MalformedResponse(String),

    /// A well-formed response with an unusable shape, or anything else.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Gateway for reply generation
///
/// This port defines how the application layer reaches the model service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send the full conversation history and wait for the model's reply.
    ///
    /// `history` is the whole store in append order; the service receives
    /// every turn on every call.
    async fn generate(&self, history: &[Message]) -> Result<ModelReply, GatewayError>;
}
