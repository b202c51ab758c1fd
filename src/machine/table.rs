//! Transition tables and the pure single-step function.

use crate::core::{State, Symbol};
use std::collections::{HashMap, HashSet};

/// Mapping from `(state, symbol)` to the successor state.
///
/// A table on its own may be incomplete; `StateMachine::new` is where
/// completeness is enforced.
///
/// # Example
///
/// ```rust
/// use residue_fsm::machine::TransitionTable;
///
/// let table: TransitionTable<&str, char> = [
///     ("even", '1', "odd"),
///     ("odd", '1', "even"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(table.get(&"even", &'1'), Some(&"odd"));
/// assert_eq!(table.get(&"even", &'0'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: State, A: Symbol> {
    rows: HashMap<S, HashMap<A, S>>,
}

impl<S: State, A: Symbol> TransitionTable<S, A> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Set the successor of `(from, symbol)`, returning the previous one.
    pub fn insert(&mut self, from: S, symbol: A, to: S) -> Option<S> {
        self.rows.entry(from).or_default().insert(symbol, to)
    }

    /// Declare `state` as a source with no transitions yet.
    pub fn add_state(&mut self, state: S) {
        self.rows.entry(state).or_default();
    }

    pub fn get(&self, from: &S, symbol: &A) -> Option<&S> {
        self.rows.get(from)?.get(symbol)
    }

    pub fn row(&self, from: &S) -> Option<&HashMap<A, S>> {
        self.rows.get(from)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.rows.contains_key(state)
    }

    /// States that have a row in the table.
    pub fn sources(&self) -> impl Iterator<Item = &S> {
        self.rows.keys()
    }

    /// Every state the table mentions, as a source or as a target.
    pub fn states(&self) -> HashSet<&S> {
        self.rows
            .iter()
            .flat_map(|(from, row)| std::iter::once(from).chain(row.values()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<S: State, A: Symbol> Default for TransitionTable<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> From<HashMap<S, HashMap<A, S>>> for TransitionTable<S, A> {
    fn from(rows: HashMap<S, HashMap<A, S>>) -> Self {
        Self { rows }
    }
}

impl<S: State, A: Symbol> FromIterator<(S, A, S)> for TransitionTable<S, A> {
    fn from_iter<I: IntoIterator<Item = (S, A, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (from, symbol, to) in iter {
            table.insert(from, symbol, to);
        }
        table
    }
}

/// Look up the successor of `state` on `symbol`.
///
/// This is the whole of the machine's execution semantics: a run is this
/// function folded over the input from the start state.
pub fn advance<'t, S: State, A: Symbol>(
    table: &'t TransitionTable<S, A>,
    state: &S,
    symbol: &A,
) -> Option<&'t S> {
    table.get(state, symbol)
}
