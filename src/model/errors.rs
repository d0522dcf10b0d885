//! Entity validation errors.

use thiserror::Error;

/// Result type for payload validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A request payload field that is missing, has the wrong type, names an
/// unknown enum value, or falls outside its declared bounds.
///
/// Validation fails fast on the first offending field; `field` carries
/// its name so the client can point at the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "required field is missing")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str) -> Self {
        Self::new(field, format!("expected {}", expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = ValidationError::missing("user_id");
        assert!(err.to_string().contains("user_id"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_type_mismatch_reason() {
        let err = ValidationError::type_mismatch("age", "an integer");
        assert_eq!(err.reason, "expected an integer");
    }
}
