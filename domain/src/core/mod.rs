//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — available Gemini models
//! - [`generation::GenerationParams`] — sampling settings sent with a request
//! - [`validation::ConfigIssue`] — a problem found while validating settings

pub mod generation;
pub mod model;
pub mod validation;
