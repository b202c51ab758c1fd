//! Calculation errors for the residue calculator.

use crate::core::RunError;
use thiserror::Error;

/// Message used when a rejected input carries no diagnostic of its own.
pub const DEFAULT_INVALID_MESSAGE: &str = "Invalid binary input";

/// Errors that can occur when computing a remainder.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalculationError {
    #[error("Input cannot be empty")]
    EmptyInput,

    #[error("{0}")]
    InvalidBinaryInput(String),

    #[error("Invalid state \"{state}\"")]
    InvalidState { state: String },

    #[error(transparent)]
    Run(#[from] RunError),
}
