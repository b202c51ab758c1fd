//! Label traits for machine states and input symbols.
//!
//! The engine never inspects a label beyond comparing and hashing it, so any
//! type meeting these bounds can name a state or a symbol.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are opaque labels. The engine compares and hashes them; the name is
/// only used for diagnostics and for callers that map states back to domain
/// values.
///
/// # Required Traits
///
/// - `Clone`: states are copied out of the transition table during a run
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: a machine may be shared between threads
///
/// # Example
///
/// ```rust
/// use residue_fsm::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light {
///     Red,
///     Green,
/// }
///
/// impl State for Light {
///     fn name(&self) -> &str {
///         match self {
///             Self::Red => "red",
///             Self::Green => "green",
///         }
///     }
/// }
///
/// assert_eq!(Light::Green.name(), "green");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's label for display/logging.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Trait for input symbols.
///
/// `Display` renders the symbol inside diagnostics such as
/// `Invalid symbol "2" at position 2`.
pub trait Symbol: Clone + Eq + Hash + Debug + Display + Send + Sync {}

impl<T> Symbol for T where T: Clone + Eq + Hash + Debug + Display + Send + Sync {}
