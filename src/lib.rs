//! Residue FSM: a validated deterministic state machine engine
//!
//! A machine is assembled from a transition table, a start state, and an
//! alphabet. Construction checks that every state with a row has a transition
//! for every symbol. Runs are a pure fold over the input, so one machine can
//! be shared freely.
//!
//! # Core Concepts
//!
//! - **State / Symbol**: opaque labels compared by equality and hashing
//! - **StateMachine**: the checked, immutable engine
//! - **MachineBuilder**: fluent construction with conflict detection
//! - **ModuloThree**: the engine configured to compute binary remainders mod 3
//!
//! # Example
//!
//! ```rust
//! use residue_fsm::builder::MachineBuilder;
//! use residue_fsm::modulo::ModuloThree;
//! use residue_fsm::state_enum;
//!
//! state_enum! {
//!     enum Parity {
//!         Even,
//!         Odd,
//!     }
//! }
//!
//! let parity = MachineBuilder::new()
//!     .start(Parity::Even)
//!     .alphabet(['0', '1'])
//!     .transition(Parity::Even, '0', Parity::Even)
//!     .transition(Parity::Even, '1', Parity::Odd)
//!     .transition(Parity::Odd, '0', Parity::Odd)
//!     .transition(Parity::Odd, '1', Parity::Even)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(parity.run("1101".chars()), Ok(Parity::Odd));
//!
//! let calculator = ModuloThree::new().unwrap();
//! assert_eq!(calculator.remainder("1101"), Ok(1));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod modulo;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder};
pub use crate::core::{Automaton, RunError, State, Validation};
pub use crate::machine::{ConstructionError, StateMachine, TransitionTable};
pub use crate::modulo::{CalculationError, ModuloThree, Residue};
