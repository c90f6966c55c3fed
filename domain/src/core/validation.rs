//! Structured issues raised while validating user-supplied settings.
//!
//! Loading never fails outright on a bad value; out-of-range settings fall
//! back to their defaults and surface here so the caller can report them.

/// Severity level of a configuration issue.
///
/// Neither level aborts startup; the tags only drive how loudly the
/// issue is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The setting is unusable as written and was discarded.
    Error,
    /// The value was out of range; its default applies instead.
    Warning,
}

/// A detected problem with one configuration field.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.into(),
            message: message.into(),
        }
    }
}
