//! Generation parameters value object

use serde::{Deserialize, Serialize};

/// Sampling settings attached to every generate request (Value Object)
///
/// Defaults mirror what the service is asked for when nothing is
/// configured: moderately creative, capped at a short-answer budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.8,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }
}
