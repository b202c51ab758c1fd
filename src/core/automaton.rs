//! The execution seam between an engine and the code built on top of it.

use super::state::{State, Symbol};
use super::validation::Validation;
use thiserror::Error;

/// Errors that can occur while running an input sequence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("Invalid symbol \"{symbol}\" at position {position}")]
    InvalidSymbol { symbol: String, position: usize },

    /// A run reached a state that appears only as a transition target.
    #[error("No transition from state \"{state}\" on symbol \"{symbol}\"")]
    UndefinedTransition { state: String, symbol: String },
}

/// Anything that can validate and execute an input sequence.
///
/// `StateMachine` is the canonical implementation. Domain layers depend on
/// this trait rather than on the concrete engine so they can be handed any
/// implementation at construction.
pub trait Automaton {
    type State: State;
    type Symbol: Symbol;

    /// Check every symbol of `input` against the alphabet.
    fn validate_input<I>(&self, input: I) -> Validation
    where
        I: IntoIterator<Item = Self::Symbol>;

    /// Consume `input` from the start state and return the final state.
    fn run<I>(&self, input: I) -> Result<Self::State, RunError>
    where
        I: IntoIterator<Item = Self::Symbol>;
}
