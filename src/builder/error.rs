//! Build errors for the machine builder.

use crate::machine::ConstructionError;
use thiserror::Error;

/// Errors that can occur when building state machines.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Conflicting transitions for state \"{state}\" and symbol \"{symbol}\": \"{first}\" and \"{second}\"")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}
