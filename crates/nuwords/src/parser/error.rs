//! Parse error types for dictionary files.

use thiserror::Error;

use crate::types::DictionaryError;

/// An error that occurred while parsing a dictionary file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// An entry whose key is not one of the dictionary tables.
    #[error("unknown entry '{key}' at {line}:{column}")]
    UnknownEntry {
        key: String,
        line: usize,
        column: usize,
    },

    /// A table defined more than once.
    #[error("duplicate entry '{key}' at {line}:{column}")]
    DuplicateEntry {
        key: String,
        line: usize,
        column: usize,
    },

    /// A word where a list was expected, or the other way around.
    #[error("entry '{key}' at {line}:{column} must be {expected}")]
    WrongShape {
        key: String,
        expected: &'static str,
        line: usize,
        column: usize,
    },

    /// A list with the wrong number of words.
    #[error("entry '{key}' at {line}:{column} expects {expected} words, got {got}")]
    WrongArity {
        key: String,
        expected: usize,
        got: usize,
        line: usize,
        column: usize,
    },

    /// A required table was never defined.
    #[error("missing entry '{key}'")]
    MissingEntry { key: &'static str },

    /// The tables parsed but do not form a valid dictionary.
    #[error(transparent)]
    Invalid(#[from] DictionaryError),
}

impl ParseError {
    /// Line and column the error points at, if it has a location.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ParseError::Syntax { line, column, .. }
            | ParseError::UnknownEntry { line, column, .. }
            | ParseError::DuplicateEntry { line, column, .. }
            | ParseError::WrongShape { line, column, .. }
            | ParseError::WrongArity { line, column, .. } => Some((*line, *column)),
            ParseError::MissingEntry { .. } | ParseError::Invalid(_) => None,
        }
    }
}
