//! Error types for the leafgen CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for leafgen operations.
///
/// Each variant maps to a specific exit code. A missing template key is a
/// configuration error on the caller's side and is never papered over with a
/// fallback template; it always surfaces to the caller carrying the key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeafgenError {
    /// The requested template key is not present in the prompt library.
    #[error("template not found: '{key}'")]
    TemplateNotFound {
        /// The key that was requested.
        key: String,
    },

    /// User provided invalid arguments or malformed variable input.
    #[error("{0}")]
    UserError(String),
}

impl LeafgenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LeafgenError::TemplateNotFound { .. } => exit_codes::TEMPLATE_FAILURE,
            LeafgenError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for leafgen operations.
pub type Result<T> = std::result::Result<T, LeafgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_not_found_has_correct_exit_code() {
        let err = LeafgenError::TemplateNotFound {
            key: "NOPE".to_string(),
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = LeafgenError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_not_found_names_the_key() {
        let err = LeafgenError::TemplateNotFound {
            key: "CUCUMBER_ONLY_TYPO".to_string(),
        };
        assert_eq!(err.to_string(), "template not found: 'CUCUMBER_ONLY_TYPO'");
    }
}
