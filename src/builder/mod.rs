//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a label macro for creating
//! state machines with minimal boilerplate while keeping construction
//! checked.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
