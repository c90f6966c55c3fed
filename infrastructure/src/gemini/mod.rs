//! Gemini API adapter.
//!
//! - [`gateway::GeminiGateway`] — the `ChatGateway` implementation over HTTP
//! - [`protocol`] — request/response wire types for `generateContent`

pub mod gateway;
pub mod protocol;
