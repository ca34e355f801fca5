//! Article error types

use thiserror::Error;

/// Errors raised by article construction and typed fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArticleError {
    /// A typed field received a value of the wrong type
    #[error(
        "expected an instance of type '{expected}' for attribute '{attribute}', got '{actual}' instead"
    )]
    TypeMismatch {
        /// Name of the field being assigned
        attribute: &'static str,
        /// Type the field was declared with
        expected: String,
        /// Type of the rejected value
        actual: String,
    },

    /// A typed field was read before any value was assigned for this owner
    #[error("'{owner}' object has no attribute '{attribute}'")]
    MissingAttribute {
        /// Type name of the owning instance
        owner: String,
        /// Name of the field being read
        attribute: &'static str,
    },

    /// A required builder field was not provided
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Result type alias using ArticleError
pub type Result<T> = std::result::Result<T, ArticleError>;
