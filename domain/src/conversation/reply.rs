//! Reply and outcome value objects for a single send

/// Transcript line used when the service answers with no candidates.
pub const EMPTY_REPLY_FALLBACK: &str = "No response from the model.";

/// What the model sent back for one request (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// First candidate's text.
    Text(String),
    /// Well-formed response with an empty candidate list.
    Empty,
}

/// Terminal result of one send (Value Object)
///
/// Every dispatched request resolves to exactly one of these. Only a
/// delivered reply is recorded in the conversation history; empty results
/// and failures surface in the transcript but leave the store untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered(String),
    EmptyResult,
    Failed(String),
}

impl SendOutcome {
    /// Line shown in the visible transcript for this outcome.
    pub fn display_text(&self) -> &str {
        match self {
            SendOutcome::Delivered(text) => text,
            SendOutcome::EmptyResult => EMPTY_REPLY_FALLBACK,
            SendOutcome::Failed(diagnostic) => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivered_displays_reply_text() {
        let outcome = SendOutcome::Delivered("hi there".to_string());
        assert_eq!(outcome.display_text(), "hi there");
    }

    #[test]
    fn test_empty_result_displays_fallback() {
        let outcome = SendOutcome::EmptyResult;
        assert_eq!(outcome.display_text(), "No response from the model.");
    }

    #[test]
    fn test_failed_displays_diagnostic() {
        let outcome = SendOutcome::Failed("Network error: timed out".to_string());
        assert_eq!(outcome.display_text(), "Network error: timed out");
    }
}
