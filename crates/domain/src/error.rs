//! Client-side validation errors
//!
//! These never come from the server. They are raised before a request is
//! built, so a failing form keeps the user's input untouched.

use thiserror::Error;

use crate::value_objects::description::MAX_DESCRIPTION_CHARS;

/// Validation failure on user-entered data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description would exceed the character cap
    #[error("Description is limited to {max} characters (got {actual})")]
    DescriptionTooLong { actual: usize, max: usize },

    /// Character name left blank
    #[error("Character name is required")]
    NameRequired,

    /// Character description left blank
    #[error("Character description is required")]
    DescriptionRequired,

    /// Login submitted without email or password
    #[error("Email and password are required")]
    MissingCredentials,
}

impl ValidationError {
    /// Creates a description-length error for a text of `actual` characters.
    pub fn description_too_long(actual: usize) -> Self {
        Self::DescriptionTooLong {
            actual,
            max: MAX_DESCRIPTION_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_too_long_carries_the_cap() {
        let err = ValidationError::description_too_long(501);
        assert_eq!(
            err,
            ValidationError::DescriptionTooLong {
                actual: 501,
                max: 500
            }
        );
        assert_eq!(
            err.to_string(),
            "Description is limited to 500 characters (got 501)"
        );
    }
}
