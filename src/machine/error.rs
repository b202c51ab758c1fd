//! Construction errors for state machines.

use thiserror::Error;

/// Reasons a transition table, start state, and alphabet fail to form a
/// valid machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("Invalid start state \"{state}\"")]
    InvalidStartState { state: String },

    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Invalid symbol \"{symbol}\": no transition from start state \"{start}\"")]
    InvalidAlphabetSymbol { symbol: String, start: String },

    #[error("Missing transition for state \"{state}\" and symbol \"{symbol}\"")]
    IncompleteTransitionTable { state: String, symbol: String },
}
