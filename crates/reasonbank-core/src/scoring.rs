//! Response scoring contract.
//!
//! Scoring is a capability: anything implementing [`Scorer`] can grade a
//! response against an item's stored answer. The current realization is an
//! exact-match rubric; an IRT-based scorer can replace it later without
//! changing callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trait for grading a True/False response.
///
/// Implementations must be pure and defined for all four combinations of
/// `correct` and `response`.
pub trait Scorer: Send + Sync {
    /// Score `response` given the item's ground truth `correct`.
    fn score(&self, correct: bool, response: bool) -> f64;
}

/// 1.0 when the response matches the ground truth, else 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactMatchScorer;

impl Scorer for ExactMatchScorer {
    fn score(&self, correct: bool, response: bool) -> f64 {
        if correct == response {
            1.0
        } else {
            0.0
        }
    }
}

impl<F> Scorer for F
where
    F: Fn(bool, bool) -> f64 + Send + Sync,
{
    fn score(&self, correct: bool, response: bool) -> f64 {
        self(correct, response)
    }
}

/// Parameters of a three-parameter logistic item response model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrtParameters {
    /// Location on the ability scale (b).
    pub difficulty: f64,
    /// Slope at the location (a); must be positive.
    pub discrimination: f64,
    /// Lower asymptote (c), in `[0, 1)`.
    #[serde(default)]
    pub guessing: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IrtParameterError {
    #[error("{0} must be finite")]
    NotFinite(&'static str),
    #[error("discrimination must be positive, got {0}")]
    Discrimination(f64),
    #[error("guessing must be in [0, 1), got {0}")]
    Guessing(f64),
}

impl IrtParameters {
    pub fn new(
        difficulty: f64,
        discrimination: f64,
        guessing: f64,
    ) -> Result<Self, IrtParameterError> {
        for (name, value) in [
            ("difficulty", difficulty),
            ("discrimination", discrimination),
            ("guessing", guessing),
        ] {
            if !value.is_finite() {
                return Err(IrtParameterError::NotFinite(name));
            }
        }
        if discrimination <= 0.0 {
            return Err(IrtParameterError::Discrimination(discrimination));
        }
        if !(0.0..1.0).contains(&guessing) {
            return Err(IrtParameterError::Guessing(guessing));
        }
        Ok(Self {
            difficulty,
            discrimination,
            guessing,
        })
    }
}
