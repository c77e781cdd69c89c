//! All error types for the xcstrings-enum crate.
//!
//! These are returned from every fallible operation (catalog decoding,
//! identifier synthesis, grouping, templating, writing). None of them are
//! recoverable within a run: generation is a pure transformation, so a failure
//! means the input or the configuration has to change.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("key `{0}` folds to an empty identifier and no sentinel is configured")]
    EmptyIdentifier(String),

    #[error("duplicate catalog key `{0}`")]
    DuplicateKey(String),

    #[error("illegal grammar configuration: {0}")]
    IllegalGrammarConfig(String),

    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new grammar configuration error.
    pub fn grammar_error(message: impl Into<String>) -> Self {
        Error::IllegalGrammarConfig(message.into())
    }

    /// Creates a new template error.
    pub fn template_error(message: impl Into<String>) -> Self {
        Error::InvalidTemplate(message.into())
    }

    /// Creates a new catalog error.
    pub fn catalog_error(message: impl Into<String>) -> Self {
        Error::InvalidCatalog(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_empty_identifier_error() {
        let error = Error::EmptyIdentifier("!!!".to_string());
        assert_eq!(
            error.to_string(),
            "key `!!!` folds to an empty identifier and no sentinel is configured"
        );
    }

    #[test]
    fn test_duplicate_key_error() {
        let error = Error::DuplicateKey("okButton".to_string());
        assert_eq!(error.to_string(), "duplicate catalog key `okButton`");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::from(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_constructor_helpers() {
        assert_eq!(
            Error::grammar_error("bad keyword").to_string(),
            "illegal grammar configuration: bad keyword"
        );
        assert_eq!(
            Error::template_error("bad enum name").to_string(),
            "invalid template: bad enum name"
        );
        assert_eq!(
            Error::catalog_error("bad language").to_string(),
            "invalid catalog: bad language"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::DuplicateKey("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("DuplicateKey"));
        assert!(debug.contains("test"));
    }
}
