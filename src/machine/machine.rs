//! Validated deterministic state machine.

use crate::core::{Automaton, RunError, RunTrace, State, Step, Symbol, Validation};
use crate::machine::error::ConstructionError;
use crate::machine::table::{advance, TransitionTable};
use std::collections::HashSet;

/// Deterministic finite-state machine over a fixed alphabet.
///
/// A `StateMachine` only exists once its table has been checked for
/// completeness, and it is immutable afterwards. Runs keep their current
/// state locally, so one machine can serve any number of callers at once.
///
/// # Example
///
/// ```rust
/// use residue_fsm::machine::{StateMachine, TransitionTable};
///
/// let table: TransitionTable<&str, char> = [
///     ("q0", 'a', "q1"),
///     ("q0", 'b', "q2"),
///     ("q1", 'a', "q2"),
///     ("q1", 'b', "q2"),
///     ("q2", 'a', "q2"),
///     ("q2", 'b', "q1"),
/// ]
/// .into_iter()
/// .collect();
///
/// let machine = StateMachine::new(table, "q0", ['a', 'b']).unwrap();
///
/// assert_eq!(machine.run("ab".chars()), Ok("q2"));
/// assert!(machine.validate_input("abc".chars()).error().is_some());
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine<S: State, A: Symbol> {
    table: TransitionTable<S, A>,
    start: S,
    alphabet: Vec<A>,
    lookup: HashSet<A>,
}

impl<S: State, A: Symbol> StateMachine<S, A> {
    /// Validate `table` against `start` and `alphabet` and build a machine.
    ///
    /// Duplicate alphabet symbols are dropped; the first occurrence fixes
    /// the order used in diagnostics.
    pub fn new<T, I>(table: T, start: S, alphabet: I) -> Result<Self, ConstructionError>
    where
        T: Into<TransitionTable<S, A>>,
        I: IntoIterator<Item = A>,
    {
        let table = table.into();

        let mut symbols = Vec::new();
        let mut lookup = HashSet::new();
        for symbol in alphabet {
            if lookup.insert(symbol.clone()) {
                symbols.push(symbol);
            }
        }

        if let Err(error) = check_table(&table, &start, &symbols) {
            tracing::warn!(%error, start = start.name(), "rejected transition table");
            return Err(error);
        }

        tracing::debug!(
            start = start.name(),
            states = table.states().len(),
            symbols = symbols.len(),
            "state machine constructed"
        );

        Ok(Self {
            table,
            start,
            alphabet: symbols,
            lookup,
        })
    }

    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// Alphabet symbols in declaration order.
    pub fn alphabet(&self) -> &[A] {
        &self.alphabet
    }

    pub fn table(&self) -> &TransitionTable<S, A> {
        &self.table
    }

    /// Every state the table mentions, including targets without a row.
    pub fn states(&self) -> HashSet<&S> {
        self.table.states()
    }

    pub fn transition(&self, from: &S, symbol: &A) -> Option<&S> {
        advance(&self.table, from, symbol)
    }

    pub fn accepts_symbol(&self, symbol: &A) -> bool {
        self.lookup.contains(symbol)
    }

    /// Check that every symbol of `input` belongs to the alphabet.
    ///
    /// Stops at the first offending symbol and reports it with its
    /// zero-based position. An empty input is valid.
    pub fn validate_input<I>(&self, input: I) -> Validation
    where
        I: IntoIterator<Item = A>,
    {
        match input
            .into_iter()
            .enumerate()
            .find(|(_, symbol)| !self.accepts_symbol(symbol))
        {
            Some((position, symbol)) => Validation::invalid(format!(
                "Invalid symbol \"{symbol}\" at position {position}. Valid symbols are: {}",
                self.valid_symbols()
            )),
            None => Validation::valid(),
        }
    }

    /// Run `input` from the start state and return the final state.
    ///
    /// An empty input returns the start state.
    pub fn run<I>(&self, input: I) -> Result<S, RunError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut current = &self.start;
        for (position, symbol) in input.into_iter().enumerate() {
            current = self.step(current, &symbol, position)?;
        }
        Ok(current.clone())
    }

    /// Run `input` and record every step taken.
    pub fn trace<I>(&self, input: I) -> Result<RunTrace<S, A>, RunError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut trace = RunTrace::new(self.start.clone());
        for (position, symbol) in input.into_iter().enumerate() {
            let from = trace.final_state().clone();
            let to = self.step(&from, &symbol, position)?.clone();
            trace = trace.record(Step { from, symbol, to });
        }
        Ok(trace)
    }

    fn step(&self, current: &S, symbol: &A, position: usize) -> Result<&S, RunError> {
        if !self.accepts_symbol(symbol) {
            let error = RunError::InvalidSymbol {
                symbol: symbol.to_string(),
                position,
            };
            tracing::warn!(%error, "run rejected input");
            return Err(error);
        }

        advance(&self.table, current, symbol).ok_or_else(|| RunError::UndefinedTransition {
            state: current.name().to_string(),
            symbol: symbol.to_string(),
        })
    }

    fn valid_symbols(&self) -> String {
        self.alphabet
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<S: State, A: Symbol> Automaton for StateMachine<S, A> {
    type State = S;
    type Symbol = A;

    fn validate_input<I>(&self, input: I) -> Validation
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        StateMachine::validate_input(self, input)
    }

    fn run<I>(&self, input: I) -> Result<S, RunError>
    where
        I: IntoIterator<Item = Self::Symbol>,
    {
        StateMachine::run(self, input)
    }
}

/// Checks run in order: start state, alphabet, then every source state.
/// States that only appear as targets need no row of their own.
fn check_table<S: State, A: Symbol>(
    table: &TransitionTable<S, A>,
    start: &S,
    alphabet: &[A],
) -> Result<(), ConstructionError> {
    let start_row = table
        .row(start)
        .ok_or_else(|| ConstructionError::InvalidStartState {
            state: start.name().to_string(),
        })?;

    if alphabet.is_empty() {
        return Err(ConstructionError::EmptyAlphabet);
    }

    if let Some(symbol) = alphabet.iter().find(|symbol| !start_row.contains_key(*symbol)) {
        return Err(ConstructionError::InvalidAlphabetSymbol {
            symbol: symbol.to_string(),
            start: start.name().to_string(),
        });
    }

    for state in table.sources() {
        if let Some(symbol) = alphabet
            .iter()
            .find(|symbol| table.get(state, symbol).is_none())
        {
            return Err(ConstructionError::IncompleteTransitionTable {
                state: state.name().to_string(),
                symbol: symbol.to_string(),
            });
        }
    }

    Ok(())
}
