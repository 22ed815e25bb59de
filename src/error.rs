//! Error types for token generation and task definition conversion.
//!
//! Serialization either produces a complete token stream or fails; there is
//! no best-effort output.
//!
//! ## Error Categories
//!
//! - **Unrepresentable values**: an [`Unknown`](crate::Value::Unknown) placeholder
//!   or a non-finite float reached the serializer
//! - **Depth limit**: the value nests deeper than
//!   [`SerializerOptions::max_depth`](crate::SerializerOptions)
//! - **Task definitions**: malformed JSON, unknown fields, or missing containers
//!
//! ## Examples
//!
//! ```rust
//! use hcl_tokens::{to_tokens, Error, Value};
//!
//! let err = to_tokens(&Value::List(vec![Value::Unknown])).unwrap_err();
//! assert!(matches!(err, Error::UnrepresentableValue(_)));
//! assert!(err.to_string().contains("[0]"));
//! ```

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The value contains something HCL cannot express
    #[error("cannot produce tokens for {0}")]
    UnrepresentableValue(String),

    /// Nesting exceeded the configured limit
    #[error("value nesting exceeds maximum depth of {limit}")]
    MaxDepthExceeded { limit: usize },

    /// Text that is not a decimal number literal
    #[error("invalid number literal: {0:?}")]
    InvalidNumber(String),

    /// An attribute or block name that is not a bare identifier
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The task definition decoded but cannot be converted
    #[error("invalid task definition: {0}")]
    InvalidTaskDefinition(String),

    /// JSON decoding failed
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an unrepresentable-value error describing what was found and where.
    ///
    /// An empty `path` refers to the root value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hcl_tokens::Error;
    ///
    /// let err = Error::unrepresentable("unknown value", "[2].name");
    /// assert_eq!(err.to_string(), "cannot produce tokens for unknown value at [2].name");
    /// ```
    pub fn unrepresentable(what: &str, path: &str) -> Self {
        if path.is_empty() {
            Error::UnrepresentableValue(what.to_string())
        } else {
            Error::UnrepresentableValue(format!("{} at {}", what, path))
        }
    }

    pub fn invalid_task_definition<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidTaskDefinition(msg.to_string())
    }

    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrepresentable_root() {
        let err = Error::unrepresentable("unknown value", "");
        assert_eq!(err.to_string(), "cannot produce tokens for unknown value");
    }

    #[test]
    fn test_depth_message() {
        let err = Error::MaxDepthExceeded { limit: 4 };
        assert_eq!(err.to_string(), "value nesting exceeds maximum depth of 4");
    }

    #[test]
    fn test_invalid_identifier_message() {
        let err = Error::InvalidIdentifier("not ident".to_string());
        assert_eq!(err.to_string(), "invalid identifier: \"not ident\"");
    }

    #[test]
    fn test_from_json_error() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
