//! Generator error types.
//!
//! A generator given structurally invalid domain input refuses to build an
//! item and returns one of these instead. They are precondition violations:
//! the caller passed something the template cannot express, so retrying with
//! the same input will fail the same way.

use thiserror::Error;

use crate::lint::TextViolation;

/// Errors raised by family generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A repeating pattern needs at least one symbol.
    #[error("repeating block must not be empty")]
    EmptyBlock,

    /// Positions in a repeating pattern are 1-indexed.
    #[error("position must be at least 1, got {0}")]
    InvalidPosition(u64),

    /// Pattern symbols are quoted in the sentence, so they must be plain
    /// ASCII letters or digits.
    #[error("pattern symbol {0:?} is not an ASCII letter or digit")]
    InvalidSymbol(char),

    /// An arithmetic sequence preview needs at least one shown term.
    #[error("sequence preview must show at least one term")]
    EmptySequence,

    #[error("{0} sequence terms cannot fit in one ESL sentence")]
    TooManyTerms(usize),

    /// A doubling claim needs at least two terms to compare.
    #[error("sequence needs at least 2 terms, got {0}")]
    SequenceTooShort(usize),

    /// Set elements are rendered bare inside parentheses.
    #[error("set element {0:?} must be a non-empty ASCII alphanumeric word")]
    InvalidSetElement(String),

    /// The rendered sentence broke one of the text rules.
    #[error("rendered text {text:?} is invalid: {violation}")]
    Text {
        text: String,
        #[source]
        violation: TextViolation,
    },
}

impl GenerateError {
    /// Returns the text rule that was broken, if this is a text error.
    pub fn text_violation(&self) -> Option<&TextViolation> {
        match self {
            GenerateError::Text { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// A specialized Result type for generator calls.
pub type Result<T> = std::result::Result<T, GenerateError>;
