//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{State, Symbol};
use crate::machine::{StateMachine, TransitionTable};

/// Builder for constructing state machines with a fluent API.
///
/// Transitions are collected as given; conflicts and table defects are
/// reported by `build`.
///
/// # Example
///
/// ```rust
/// use residue_fsm::builder::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .start("locked")
///     .alphabet(['c', 'p'])
///     .transition("locked", 'c', "unlocked")
///     .transition("locked", 'p', "locked")
///     .transition("unlocked", 'c', "unlocked")
///     .transition("unlocked", 'p', "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.run("cp".chars()), Ok("locked"));
/// ```
pub struct MachineBuilder<S: State, A: Symbol> {
    start: Option<S>,
    alphabet: Vec<A>,
    table: TransitionTable<S, A>,
    conflict: Option<BuildError>,
}

impl<S: State, A: Symbol> MachineBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            alphabet: Vec::new(),
            table: TransitionTable::new(),
            conflict: None,
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Add one alphabet symbol.
    pub fn symbol(mut self, symbol: A) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add several alphabet symbols, keeping their order.
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// Declare a state that has no transitions yet.
    pub fn state(mut self, state: S) -> Self {
        self.table.add_state(state);
        self
    }

    /// Add a transition. Repeating an identical transition is harmless.
    pub fn transition(mut self, from: S, symbol: A, to: S) -> Self {
        let (state, sym, second) = (from.clone(), symbol.clone(), to.clone());
        if let Some(first) = self.table.insert(from, symbol, to) {
            if first != second && self.conflict.is_none() {
                self.conflict = Some(BuildError::ConflictingTransition {
                    state: state.name().to_string(),
                    symbol: sym.to_string(),
                    first: first.name().to_string(),
                    second: second.name().to_string(),
                });
            }
        }
        self
    }

    /// Add multiple `(from, symbol, to)` transitions at once.
    pub fn transitions<I>(self, transitions: I) -> Self
    where
        I: IntoIterator<Item = (S, A, S)>,
    {
        transitions
            .into_iter()
            .fold(self, |builder, (from, symbol, to)| {
                builder.transition(from, symbol, to)
            })
    }

    /// Build the state machine.
    /// Returns an error if the start state is missing, two transitions
    /// conflict, or the table does not form a valid machine.
    pub fn build(self) -> Result<StateMachine<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        if let Some(conflict) = self.conflict {
            return Err(conflict);
        }

        Ok(StateMachine::new(self.table, start, self.alphabet)?)
    }
}

impl<S: State, A: Symbol> Default for MachineBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::ConstructionError;
    use crate::state_enum;

    state_enum! {
        enum Door {
            Closed,
            Open,
            Jammed,
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<Door, char>::new().alphabet(['o']).build();

        assert!(matches!(result, Err(BuildError::MissingStartState)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .start(Door::Closed)
            .symbol('o')
            .symbol('c')
            .transition(Door::Closed, 'o', Door::Open)
            .transition(Door::Closed, 'c', Door::Closed)
            .transition(Door::Open, 'o', Door::Open)
            .transition(Door::Open, 'c', Door::Closed)
            .build()
            .unwrap();

        assert_eq!(machine.start_state(), &Door::Closed);
        assert_eq!(machine.alphabet(), &['o', 'c']);
        assert_eq!(machine.run("oco".chars()), Ok(Door::Open));
    }

    #[test]
    fn add_multiple_transitions() {
        let machine = MachineBuilder::new()
            .start(Door::Closed)
            .alphabet(['o'])
            .transitions(vec![
                (Door::Closed, 'o', Door::Open),
                (Door::Open, 'o', Door::Closed),
            ])
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn conflicting_transitions_are_rejected() {
        let result = MachineBuilder::new()
            .start(Door::Closed)
            .alphabet(['o'])
            .transition(Door::Closed, 'o', Door::Open)
            .transition(Door::Closed, 'o', Door::Jammed)
            .transition(Door::Open, 'o', Door::Open)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::ConflictingTransition {
                state: "Closed".to_string(),
                symbol: "o".to_string(),
                first: "Open".to_string(),
                second: "Jammed".to_string(),
            }
        );
    }

    #[test]
    fn repeated_identical_transition_is_allowed() {
        let result = MachineBuilder::new()
            .start(Door::Closed)
            .alphabet(['o'])
            .transition(Door::Closed, 'o', Door::Closed)
            .transition(Door::Closed, 'o', Door::Closed)
            .build();

        assert!(result.is_ok());
    }

    #[test]
    fn declared_state_without_transitions_is_incomplete() {
        let result = MachineBuilder::new()
            .start(Door::Closed)
            .alphabet(['o'])
            .transition(Door::Closed, 'o', Door::Closed)
            .state(Door::Jammed)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::Construction(ConstructionError::IncompleteTransitionTable {
                state: "Jammed".to_string(),
                symbol: "o".to_string(),
            })
        );
    }

    #[test]
    fn construction_errors_keep_their_message() {
        let error = MachineBuilder::<Door, char>::new()
            .start(Door::Open)
            .alphabet(['o'])
            .transition(Door::Closed, 'o', Door::Closed)
            .build()
            .unwrap_err();

        assert_eq!(error.to_string(), "Invalid start state \"Open\"");
    }
}
