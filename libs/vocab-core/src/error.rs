//! Error types for vocab-core.

use thiserror::Error;

use crate::types::QuizType;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised while validating a word snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WordStoreError {
    #[error("empty word id at position {position}")]
    EmptyId { position: usize },

    #[error("duplicate word id {id} at position {position}")]
    DuplicateId { id: String, position: usize },

    #[error("word {id} has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

/// Errors that prevent a quiz from starting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("could not generate questions")]
    NoQuestions,

    #[error("quiz type {0} is not supported")]
    UnsupportedType(QuizType),
}
