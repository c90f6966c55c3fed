//! Typed view of the TOML configuration file
//!
//! # Example
//!
//! ```toml
//! [api]
//! model = "gemini-1.5-flash"
//!
//! [generation]
//! temperature = 0.4
//! max_output_tokens = 1024
//! ```
//!
//! Every field is optional; anything absent falls back to its default.
//! Bad values never abort the load: they are replaced by defaults and
//! reported as [`ConfigIssue`]s for the caller to print.

use gemcat_domain::{ConfigIssue, GenerationParams, Model};
use serde::{Deserialize, Serialize};

/// Root of the configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub api: FileApiConfig,
    pub generation: FileGenerationConfig,
}

impl FileConfig {
    /// Validate every section, collecting issues without failing.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let (_, api_issues) = self.api.parse_model();
        issues.extend(api_issues);
        let (_, generation_issues) = self.generation.to_params();
        issues.extend(generation_issues);
        issues
    }
}

/// `[api]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Model identifier, e.g. "gemini-1.5-pro"
    pub model: Option<String>,
    /// Endpoint prefix override, for proxies and tests
    pub base_url: Option<String>,
}

impl FileApiConfig {
    /// Parse the configured model, collecting an issue for empty names.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        match self.model.as_deref() {
            None => (None, issues),
            Some(s) if s.trim().is_empty() => {
                issues.push(ConfigIssue::error(
                    "api.model",
                    "api.model: model name cannot be empty",
                ));
                (None, issues)
            }
            // Model::from_str is infallible; unknown names become Custom(...)
            Some(s) => (Some(s.parse().unwrap()), issues),
        }
    }
}

/// `[generation]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
    pub max_output_tokens: Option<u32>,
}

impl FileGenerationConfig {
    /// Resolve sampling parameters, keeping defaults for out-of-range
    /// values and reporting each rejection as a warning.
    pub fn to_params(&self) -> (GenerationParams, Vec<ConfigIssue>) {
        let mut params = GenerationParams::default();
        let mut issues = Vec::new();

        if let Some(temperature) = self.temperature {
            if (0.0..=2.0).contains(&temperature) {
                params.temperature = temperature;
            } else {
                issues.push(ConfigIssue::warning(
                    "generation.temperature",
                    format!(
                        "generation.temperature: {temperature} is outside 0.0..=2.0, using {}",
                        params.temperature
                    ),
                ));
            }
        }

        if let Some(top_p) = self.top_p {
            if (0.0..=1.0).contains(&top_p) {
                params.top_p = top_p;
            } else {
                issues.push(ConfigIssue::warning(
                    "generation.top_p",
                    format!(
                        "generation.top_p: {top_p} is outside 0.0..=1.0, using {}",
                        params.top_p
                    ),
                ));
            }
        }

        if let Some(top_k) = self.top_k {
            if top_k >= 1 {
                params.top_k = top_k;
            } else {
                issues.push(ConfigIssue::warning(
                    "generation.top_k",
                    format!("generation.top_k: must be at least 1, using {}", params.top_k),
                ));
            }
        }

        if let Some(max_output_tokens) = self.max_output_tokens {
            if max_output_tokens >= 1 {
                params.max_output_tokens = max_output_tokens;
            } else {
                issues.push(ConfigIssue::warning(
                    "generation.max_output_tokens",
                    format!(
                        "generation.max_output_tokens: must be at least 1, using {}",
                        params.max_output_tokens
                    ),
                ));
            }
        }

        (params, issues)
    }
}
