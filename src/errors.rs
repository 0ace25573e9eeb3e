//! Shared error types for the survey core.
//!
//! Two kinds matter to callers: `Validation` (input outside its declared
//! domain, always naming the offending field) and `Internal` (a state the
//! type system should have made unreachable). The remaining variants wrap
//! the ambient failures of the CLI host (filesystem, JSON, config).

use thiserror::Error;

/// Main error type for survey operations.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Input outside its declared domain (bad rating, non-bijective ranks,
    /// malformed submission field).
    #[error("Validation error: {message}{}", field_suffix(.field))]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Unreachable-state defect. Indicates a logic bug, not bad input.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration file errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" (field: {name})"),
        None => String::new(),
    }
}

impl SurveyError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error naming the offending field.
    pub fn validation_in(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The field associated with a validation error, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// True for errors the respondent can fix by correcting their input.
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field() {
        let err = SurveyError::validation_in("rating 7 outside 1-5", "clarity_2");
        assert_eq!(err.field(), Some("clarity_2"));
        let msg = err.to_string();
        assert!(msg.contains("rating 7 outside 1-5"));
        assert!(msg.contains("clarity_2"));
    }

    #[test]
    fn validation_error_without_field() {
        let err = SurveyError::validation("ranks do not form a permutation");
        assert_eq!(err.field(), None);
        assert!(!err.to_string().contains("(field:"));
    }

    #[test]
    fn internal_error_is_not_user_fixable() {
        let err = SurveyError::internal("unknown emotion code '+?'");
        assert!(!err.is_user_fixable());
        assert!(err.to_string().starts_with("Internal error"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SurveyError = io_err.into();
        assert!(matches!(err, SurveyError::Io(_)));
    }
}
