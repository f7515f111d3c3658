//! Calculation errors
//!
//! Errors never crash the calculator. They are values that propagate
//! through computations until a display boundary absorbs them into
//! user-facing text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for calculator operations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CalcError {
    /// Expression text could not be parsed
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// Input text is not a number
    #[error("Invalid input")]
    InvalidNumber(String),

    /// Logarithm of a non-positive value
    #[error("Invalid input (must be > 0)")]
    NonPositive,
}

impl CalcError {
    pub fn syntax(details: impl Into<String>) -> Self {
        Self::Syntax(details.into())
    }

    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber(text.into())
    }
}
