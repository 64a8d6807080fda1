//! Domain error type.

use thiserror::Error;

/// A rejected command.
///
/// Every precondition failure in the write model surfaces as this one kind.
/// A rejection leaves the aggregate untouched: no event is raised, the
/// version does not move, and the caller decides whether to correct the
/// input or report the reason upstream. Nothing here is transient, so
/// nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct DomainError {
    reason: String,
}

impl DomainError {
    /// Creates an error carrying a human-readable rejection reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The rejection reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Result alias used across the write model.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_reason() {
        let err = DomainError::new("stock count to remove must be positive");
        assert_eq!(err.to_string(), "stock count to remove must be positive");
        assert_eq!(err.reason(), "stock count to remove must be positive");
    }

    #[test]
    fn test_accepts_owned_and_borrowed_reasons() {
        let borrowed = DomainError::new("already deleted");
        let owned = DomainError::new(String::from("already deleted"));
        assert_eq!(borrowed, owned);
    }
}
