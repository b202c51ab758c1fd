//! Step-by-step record of a machine run.
//!
//! A trace is built by value: `record` consumes the trace and returns it with
//! one more step, so a finished trace is never observed half-built.

use super::state::{State, Symbol};
use serde::{Deserialize, Serialize};

/// Record of a single transition taken during a run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<S, A> {
    /// The state being transitioned from
    pub from: S,
    /// The symbol consumed
    pub symbol: A,
    /// The state being transitioned to
    pub to: S,
}

/// Ordered record of every step a run took, starting from the start state.
///
/// # Example
///
/// ```rust
/// use residue_fsm::core::{RunTrace, Step};
///
/// let trace = RunTrace::new("q0")
///     .record(Step { from: "q0", symbol: 'a', to: "q1" })
///     .record(Step { from: "q1", symbol: 'b', to: "q2" });
///
/// assert_eq!(trace.path(), vec![&"q0", &"q1", &"q2"]);
/// assert_eq!(trace.final_state(), &"q2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTrace<S, A> {
    start: S,
    steps: Vec<Step<S, A>>,
}

impl<S: State, A: Symbol> RunTrace<S, A> {
    /// Create an empty trace positioned at `start`.
    pub fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: Step<S, A>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn start(&self) -> &S {
        &self.start
    }

    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The state reached after the last step, or the start state if no
    /// step was taken.
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// Get the path of states traversed.
    ///
    /// Returns the start state followed by the `to` state of each step.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }
}
