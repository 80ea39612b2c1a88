//! Entry form validation errors

use thiserror::Error;

/// Reasons a form submission is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Name field empty or whitespace only
    #[error("Dish name is required")]
    EmptyName,

    /// Order count field left blank
    #[error("Number of requests is required")]
    MissingOrderCount,

    /// Order count text is not a base-10 integer
    #[error("Number of requests must be a whole number, got {0:?}")]
    InvalidOrderCount(String),

    /// Order count parsed but is zero or negative
    #[error("Number of requests must be at least 1")]
    OrderCountBelowMinimum,

    /// Order count does not fit the counter
    #[error("Number of requests is too large")]
    OrderCountTooLarge,
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::InvalidOrderCount("abc".to_string());
        assert_eq!(
            err.to_string(),
            "Number of requests must be a whole number, got \"abc\""
        );
        assert_eq!(FormError::EmptyName.to_string(), "Dish name is required");
    }
}
