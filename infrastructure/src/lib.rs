//! Infrastructure layer for gemcat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;

// Re-export commonly used types
pub use config::{ConfigLoader, FileApiConfig, FileConfig, FileGenerationConfig};
pub use credentials::{API_KEY_ENV, resolve_api_key};
pub use gemini::gateway::{DEFAULT_BASE_URL, GeminiGateway};
