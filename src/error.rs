//! Error types for xsdbind
//!
//! This module defines all error types used throughout the library.

use std::fmt;
use thiserror::Error;

/// Result type alias using xsdbind Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for binding operations
#[derive(Error, Debug)]
pub enum Error {
    /// A simple value did not conform to its XSD lexical space
    #[error("lexical error: {0}")]
    Lexical(#[from] LexicalError),

    /// Decoding error (XML to data binding)
    #[error("decoding error: {0}")]
    Decode(String),

    /// Encoding error (data to XML serialization)
    #[error("encoding error: {0}")]
    Encode(String),

    /// Structural XML error from the underlying parser
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a lexical error on a given XSD type
    pub fn lexical(type_name: &'static str, value: impl Into<String>) -> Self {
        Error::Lexical(LexicalError::new(type_name, value))
    }
}

/// A value that could not be parsed as (or formatted into) the lexical
/// space of an XSD simple type
#[derive(Debug, Clone)]
pub struct LexicalError {
    /// Name of the XSD type whose lexical space was violated
    pub type_name: &'static str,
    /// The offending lexical value
    pub value: String,
    /// Path of the carrying attribute or element within the document
    pub path: Option<String>,
}

impl LexicalError {
    /// Create a new lexical error
    pub fn new(type_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            type_name,
            value: value.into(),
            path: None,
        }
    }

    /// Attach the document path where the value was found
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} value {:?}", self.type_name, self.value)?;
        if let Some(path) = &self.path {
            write!(f, " at {}", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for LexicalError {}

/// A cardinality problem found while binding a document.
///
/// Violations never abort decoding; the checked entry points collect them
/// so callers can decide how strict to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the carrying element within the document
    pub path: String,
    /// What went wrong
    pub kind: ViolationKind,
}

/// Kinds of cardinality violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required attribute or child element was absent
    MissingRequired {
        /// Display name of the missing attribute or element
        field: String,
    },
    /// A singular attribute or child element occurred more than once
    /// (the last occurrence wins)
    DuplicateSingular {
        /// Display name of the duplicated attribute or element
        field: String,
    },
    /// More than one alternative of a one-of group was present
    AmbiguousChoice,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingRequired { field } => {
                write!(f, "{}: missing required {}", self.path, field)
            }
            ViolationKind::DuplicateSingular { field } => {
                write!(f, "{}: {} occurs more than once", self.path, field)
            }
            ViolationKind::AmbiguousChoice => {
                write!(f, "{}: more than one alternative present", self.path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_display() {
        let err = LexicalError::new("xsd:boolean", "maybe");
        assert_eq!(err.to_string(), "invalid xsd:boolean value \"maybe\"");

        let err = err.with_path("/lido/lidoRecID/@pref");
        assert_eq!(
            err.to_string(),
            "invalid xsd:boolean value \"maybe\" at /lido/lidoRecID/@pref"
        );
    }

    #[test]
    fn test_violation_display() {
        let v = Violation {
            path: "/lido/descriptiveMetadata".to_string(),
            kind: ViolationKind::MissingRequired {
                field: "@xml:lang".to_string(),
            },
        };
        assert_eq!(
            v.to_string(),
            "/lido/descriptiveMetadata: missing required @xml:lang"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = LexicalError::new("xsd:integer", "abc").into();
        assert!(matches!(err, Error::Lexical(_)));
        assert!(err.to_string().contains("xsd:integer"));
    }
}
