//! Wire types for the `generateContent` endpoint
//!
//! Field names follow the service's camelCase JSON. The request flattens the
//! whole history into a single content block whose parts carry one text
//! entry per stored message; no role attribution travels on the wire.

use gemcat_domain::{GenerationParams, Message};
use serde::{Deserialize, Serialize};

/// One text part within a content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Block of parts; requests always carry exactly one
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Sampling settings in wire form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

/// Body POSTed to `models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn from_history(history: &[Message], params: &GenerationParams) -> Self {
        let parts = history
            .iter()
            .map(|message| Part {
                text: message.content.clone(),
            })
            .collect();
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig::from(params),
        }
    }
}

/// Response body of `generateContent`, reduced to the fields we read
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, when present.
    pub fn first_candidate_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|part| part.text.as_str())
    }
}
