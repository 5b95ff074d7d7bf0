//! Store error types
//!
//! Error codes:
//! - DOCSTORE_INVALID_ARGUMENT
//! - DOCSTORE_MALFORMED_JSON

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by `DocumentStore`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `save` was called without a document
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A JSON entry point received text it could not parse
    #[error("Malformed JSON: {0}")]
    MalformedJson(String),
}

impl StoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn malformed_json(msg: impl Into<String>) -> Self {
        Self::MalformedJson(msg.into())
    }

    /// Stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "DOCSTORE_INVALID_ARGUMENT",
            Self::MalformedJson(_) => "DOCSTORE_MALFORMED_JSON",
        }
    }

    /// Returns the error message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(msg) | Self::MalformedJson(msg) => msg,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedJson(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            StoreError::invalid_argument("x").code(),
            "DOCSTORE_INVALID_ARGUMENT"
        );
        assert_eq!(
            StoreError::malformed_json("x").code(),
            "DOCSTORE_MALFORMED_JSON"
        );
    }

    #[test]
    fn test_display_and_message() {
        let err = StoreError::invalid_argument("Document cannot be null");
        assert_eq!(err.to_string(), "Invalid argument: Document cannot be null");
        assert_eq!(err.message(), "Document cannot be null");
    }

    #[test]
    fn test_from_serde_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = StoreError::from(parse);
        assert!(matches!(err, StoreError::MalformedJson(_)));
    }
}
