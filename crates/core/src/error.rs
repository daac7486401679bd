//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Coarse classification of a [`DomainError`].
///
/// Every kind is caller-correctable: the rejected operation left the domain
/// object in its previous valid state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    OutOfRange,
    NullArgument,
    InvalidOperation,
    InvalidId,
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (range checks,
/// missing arguments, business-rule conflicts). Presentation concerns belong
/// to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric argument fell outside its closed valid interval.
    #[error("{argument} is out of range: {message}")]
    OutOfRange {
        argument: &'static str,
        message: String,
    },

    /// A required argument was absent.
    #[error("{argument} must not be empty")]
    NullArgument { argument: &'static str },

    /// A business rule forbids the requested mutation in the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn out_of_range(argument: &'static str, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            argument,
            message: message.into(),
        }
    }

    pub fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn kind(&self) -> DomainErrorKind {
        match self {
            DomainError::OutOfRange { .. } => DomainErrorKind::OutOfRange,
            DomainError::NullArgument { .. } => DomainErrorKind::NullArgument,
            DomainError::InvalidOperation(_) => DomainErrorKind::InvalidOperation,
            DomainError::InvalidId(_) => DomainErrorKind::InvalidId,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_argument_and_bound() {
        let err = DomainError::out_of_range("discount percent", "must not be less than 0");
        assert_eq!(
            err.to_string(),
            "discount percent is out of range: must not be less than 0"
        );
        assert_eq!(err.kind(), DomainErrorKind::OutOfRange);
    }

    #[test]
    fn null_argument_message() {
        let err = DomainError::null_argument("delivery method");
        assert_eq!(err.to_string(), "delivery method must not be empty");
        assert_eq!(err.kind(), DomainErrorKind::NullArgument);
    }

    #[test]
    fn invalid_operation_keeps_reason() {
        let err = DomainError::invalid_operation("courier not allowed");
        match &err {
            DomainError::InvalidOperation(msg) if msg == "courier not allowed" => {}
            _ => panic!("Expected InvalidOperation"),
        }
        assert_eq!(err.kind(), DomainErrorKind::InvalidOperation);
    }
}
