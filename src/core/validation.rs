//! Outcome of checking an input sequence before running it.

use serde::{Deserialize, Serialize};

/// Result of validating an input sequence.
///
/// Unlike a `Result`, an invalid outcome is not required to carry a message;
/// callers that need text fall back to their own default.
///
/// Serializes as `{"isValid": true}` or
/// `{"isValid": false, "error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Validation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Validation {
    /// A passing validation.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    /// A failing validation with a diagnostic message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
