//! Remainder of a binary number modulo 3, computed by walking a DFA.

use crate::core::{Automaton, RunTrace, State, Validation};
use crate::machine::{ConstructionError, StateMachine};
use crate::modulo::error::{CalculationError, DEFAULT_INVALID_MESSAGE};
use crate::modulo::residue::{residue_table, Residue, BINARY_ALPHABET};

/// Binary modulo-3 calculator.
///
/// Owns one machine and is otherwise stateless, so a single instance can be
/// built at startup and passed to whatever needs it.
///
/// # Example
///
/// ```rust
/// use residue_fsm::modulo::ModuloThree;
///
/// let calculator = ModuloThree::new().unwrap();
///
/// assert_eq!(calculator.remainder("1100"), Ok(0));
/// assert_eq!(calculator.remainder("1010101010101010"), Ok(1));
/// assert!(calculator.remainder("102").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ModuloThree<M = StateMachine<Residue, char>> {
    machine: M,
}

impl ModuloThree {
    /// Build the calculator around the residue table, starting at `r0`.
    pub fn new() -> Result<Self, ConstructionError> {
        let machine = StateMachine::new(residue_table(), Residue::R0, BINARY_ALPHABET)?;
        Ok(Self { machine })
    }

    /// Validate `text` and return the residue reached after each digit.
    pub fn trace(&self, text: &str) -> Result<RunTrace<Residue, char>, CalculationError> {
        self.check(text)?;
        Ok(self.machine.trace(text.chars())?)
    }
}

impl<M: Automaton<Symbol = char>> ModuloThree<M> {
    /// Wrap an existing automaton. Its final states must be labelled
    /// `r0`, `r1`, or `r2`.
    pub fn with_machine(machine: M) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Check that `text` is a non-blank string of binary digits.
    ///
    /// Whitespace is only trimmed to decide emptiness; a digit string with
    /// surrounding spaces is still rejected by the symbol check.
    pub fn validate_binary(&self, text: &str) -> Validation {
        if text.trim_matches(is_blank).is_empty() {
            return Validation::invalid(CalculationError::EmptyInput.to_string());
        }

        self.machine.validate_input(text.chars())
    }

    /// Remainder of the binary number `text` divided by 3.
    pub fn remainder(&self, text: &str) -> Result<u8, CalculationError> {
        self.check(text)?;

        let state = self.machine.run(text.chars())?;
        let remainder = Residue::from_name(state.name())
            .map(Residue::value)
            .ok_or_else(|| CalculationError::InvalidState {
                state: state.name().to_string(),
            })?;

        tracing::debug!(digits = text.len(), remainder, "computed remainder");
        Ok(remainder)
    }

    fn check(&self, text: &str) -> Result<(), CalculationError> {
        let validation = self.validate_binary(text);
        if validation.is_valid() {
            return Ok(());
        }

        let message = validation
            .error
            .unwrap_or_else(|| DEFAULT_INVALID_MESSAGE.to_string());
        tracing::debug!(reason = %message, "rejected binary input");
        Err(CalculationError::InvalidBinaryInput(message))
    }
}

/// Whitespace plus the byte-order mark, which `str::trim` keeps.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RunError;

    /// Automaton with canned answers, for driving the calculator's
    /// defensive paths.
    struct Scripted {
        validation: Validation,
        state: &'static str,
    }

    impl Automaton for Scripted {
        type State = &'static str;
        type Symbol = char;

        fn validate_input<I>(&self, _input: I) -> Validation
        where
            I: IntoIterator<Item = Self::Symbol>,
        {
            self.validation.clone()
        }

        fn run<I>(&self, _input: I) -> Result<&'static str, RunError>
        where
            I: IntoIterator<Item = Self::Symbol>,
        {
            Ok(self.state)
        }
    }

    fn calculator() -> ModuloThree {
        ModuloThree::new().unwrap()
    }

    #[test]
    fn accepts_binary_input() {
        let calculator = calculator();
        assert_eq!(calculator.validate_binary("1010"), Validation::valid());
        assert!(calculator.validate_binary("0").is_valid());
        assert!(calculator.validate_binary("1").is_valid());
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        let calculator = calculator();
        for text in ["", "   ", "\t\n", "\u{feff}", " \u{feff}\u{a0} "] {
            let result = calculator.validate_binary(text);
            assert!(!result.is_valid());
            assert_eq!(result.error(), Some("Input cannot be empty"));
        }
    }

    #[test]
    fn rejects_non_binary_symbols() {
        let calculator = calculator();

        let result = calculator.validate_binary("102");
        assert_eq!(
            result.error(),
            Some("Invalid symbol \"2\" at position 2. Valid symbols are: 0, 1")
        );

        assert!(calculator
            .validate_binary("10a1")
            .error()
            .unwrap()
            .contains("Invalid symbol \"a\""));
        assert!(calculator
            .validate_binary("10-1")
            .error()
            .unwrap()
            .contains("Invalid symbol \"-\""));
    }

    #[test]
    fn byte_order_mark_before_digits_is_a_symbol_error() {
        let result = calculator().validate_binary("\u{feff}101");
        assert!(result
            .error()
            .unwrap()
            .starts_with("Invalid symbol \"\u{feff}\" at position 0"));
    }

    #[test]
    fn surrounding_whitespace_is_not_trimmed_for_symbols() {
        let calculator = calculator();
        let result = calculator.validate_binary(" 11");
        assert!(result
            .error()
            .unwrap()
            .starts_with("Invalid symbol \" \" at position 0"));
    }

    #[test]
    fn remainder_zero() {
        let calculator = calculator();
        for text in ["0", "11", "110", "1001", "1100", "11111111"] {
            assert_eq!(calculator.remainder(text), Ok(0), "{text}");
        }
    }

    #[test]
    fn remainder_one() {
        let calculator = calculator();
        for text in ["1", "100", "111", "1010", "10000", "100000000"] {
            assert_eq!(calculator.remainder(text), Ok(1), "{text}");
        }
        assert_eq!(calculator.remainder("1010101010101010"), Ok(1));
    }

    #[test]
    fn remainder_two() {
        let calculator = calculator();
        for text in ["10", "101", "1000", "1011", "1110", "100000001"] {
            assert_eq!(calculator.remainder(text), Ok(2), "{text}");
        }
    }

    #[test]
    fn leading_zeros_do_not_change_remainder() {
        let calculator = calculator();
        assert_eq!(calculator.remainder("000101"), calculator.remainder("101"));
    }

    #[test]
    fn remainder_surfaces_validation_message() {
        let calculator = calculator();

        let error = calculator.remainder("1a0").unwrap_err();
        assert!(matches!(error, CalculationError::InvalidBinaryInput(_)));
        assert!(error.to_string().contains("Invalid symbol \"a\""));

        let error = calculator.remainder("12").unwrap_err();
        assert!(error.to_string().contains("Invalid symbol \"2\""));
    }

    #[test]
    fn remainder_rejects_empty_input() {
        let error = calculator().remainder("").unwrap_err();
        assert_eq!(
            error,
            CalculationError::InvalidBinaryInput("Input cannot be empty".to_string())
        );
        assert_eq!(error.to_string(), "Input cannot be empty");
    }

    #[test]
    fn remainder_falls_back_to_default_message() {
        let calculator = ModuloThree::with_machine(Scripted {
            validation: Validation {
                is_valid: false,
                error: None,
            },
            state: "r0",
        });

        let error = calculator.remainder("1010").unwrap_err();
        assert_eq!(error.to_string(), "Invalid binary input");
    }

    #[test]
    fn remainder_rejects_unknown_final_state() {
        let calculator = ModuloThree::with_machine(Scripted {
            validation: Validation::valid(),
            state: "invalid_state",
        });

        assert_eq!(
            calculator.remainder("1010"),
            Err(CalculationError::InvalidState {
                state: "invalid_state".to_string()
            })
        );
    }

    #[test]
    fn injected_machine_maps_labels() {
        let calculator = ModuloThree::with_machine(Scripted {
            validation: Validation::valid(),
            state: "r2",
        });
        assert_eq!(calculator.remainder("anything"), Ok(2));
    }

    #[test]
    fn trace_lists_residues_per_digit() {
        let trace = calculator().trace("110").unwrap();
        assert_eq!(
            trace.path(),
            vec![&Residue::R0, &Residue::R1, &Residue::R0, &Residue::R0]
        );
    }

    #[test]
    fn trace_rejects_invalid_input() {
        assert!(matches!(
            calculator().trace(""),
            Err(CalculationError::InvalidBinaryInput(_))
        ));
    }

    #[test]
    fn calculator_is_reusable() {
        let calculator = calculator();
        assert_eq!(calculator.remainder("10"), Ok(2));
        assert!(calculator.remainder("x").is_err());
        assert_eq!(calculator.remainder("10"), Ok(2));
    }
}
