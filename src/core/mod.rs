//! Core state machine types.
//!
//! This module contains the label traits and value types shared by the
//! engine and the layers built on it:
//! - `State` and `Symbol` label traits
//! - the `Automaton` execution seam and its `RunError`
//! - `Validation` outcomes and `RunTrace` step records
//!
//! Nothing in this module holds mutable state.

mod automaton;
mod state;
mod trace;
mod validation;

pub use automaton::{Automaton, RunError};
pub use state::{State, Symbol};
pub use trace::{RunTrace, Step};
pub use validation::Validation;
