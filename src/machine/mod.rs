//! The deterministic state machine engine.
//!
//! A machine is built from a transition table, a start state, and an
//! alphabet. Construction checks that the table is complete, and execution
//! is the pure [`advance`] function folded over the input.

mod error;
#[allow(clippy::module_inception)]
mod machine;
mod table;

pub use error::ConstructionError;
pub use machine::StateMachine;
pub use table::{advance, TransitionTable};
