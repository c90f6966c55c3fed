//! API key resolution
//!
//! The key is looked up in the environment; front ends may fall back to
//! prompting. It is never read from the configuration file, keeping
//! credentials out of dotfiles that tend to end up in version control.

use tracing::debug;

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Read the API key from the environment, treating blank values as unset.
pub fn resolve_api_key() -> Option<String> {
    let key = normalize(std::env::var(API_KEY_ENV).ok());
    if key.is_some() {
        debug!("Using API key from {API_KEY_ENV}");
    }
    key
}

fn normalize(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize(Some("  abc123  ".to_string())),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_blank_values() {
        assert_eq!(normalize(Some("   ".to_string())), None);
        assert_eq!(normalize(Some(String::new())), None);
        assert_eq!(normalize(None), None);
    }
}
