//! Roster error types.
//!
//! Every failing [`RosterStore`](crate::store::RosterStore) operation returns
//! one of these, and none of them leave the store partially updated.

use thiserror::Error;

/// Errors raised by roster operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RosterError {
    /// A field that must be numeric (or non-empty) was not.
    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },

    /// The operation addressed a NIM that is not in the roster.
    #[error("student not found: {0}")]
    NotFound(String),

    /// A student with this NIM already exists.
    #[error("student already exists: {0}")]
    DuplicateKey(String),
}

impl RosterError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        RosterError::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Returns `true` if the error came from bad user input rather than a
    /// lookup against the roster.
    pub fn is_input_error(&self) -> bool {
        matches!(self, RosterError::InvalidValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = RosterError::invalid("hadir", "abc");
        assert_eq!(err.to_string(), "invalid value for hadir: 'abc'");
        assert!(err.is_input_error());

        let err = RosterError::NotFound("230101009".into());
        assert_eq!(err.to_string(), "student not found: 230101009");
        assert!(!err.is_input_error());

        let err = RosterError::DuplicateKey("230101001".into());
        assert!(err.to_string().contains("230101001"));
    }
}
