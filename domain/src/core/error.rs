//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DomainError {
    /// Check if this error was caused by caller-supplied input
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, DomainError::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let error = DomainError::InvalidRequest("category must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid request: category must not be empty"
        );
    }

    #[test]
    fn test_is_invalid_request_check() {
        assert!(DomainError::InvalidRequest("x".to_string()).is_invalid_request());
    }
}
