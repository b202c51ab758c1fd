//! Residue classes modulo 3 and the transition table that walks them.

use crate::core::State;
use crate::machine::TransitionTable;
use crate::state_enum;

state_enum! {
    /// Remainder of the binary number read so far, divided by 3.
    pub enum Residue {
        R0 => "r0",
        R1 => "r1",
        R2 => "r2",
    }
}

impl Residue {
    pub const ALL: [Residue; 3] = [Residue::R0, Residue::R1, Residue::R2];

    /// Numeric remainder represented by this state.
    pub fn value(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R1 => 1,
            Self::R2 => 2,
        }
    }

    /// Look a residue up by its state label.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|residue| residue.name() == name)
    }

    /// The residue reached by appending `bit` to a number in this class.
    ///
    /// Shifting left doubles the value, so `r` becomes `(2r + bit) mod 3`.
    pub fn shift_in(self, bit: u8) -> Self {
        match (2 * self.value() + bit) % 3 {
            0 => Self::R0,
            1 => Self::R1,
            _ => Self::R2,
        }
    }
}

/// Binary digits, in the order listed by diagnostics.
pub const BINARY_ALPHABET: [char; 2] = ['0', '1'];

/// The modulo-3 table over `{'0', '1'}`:
///
/// | state | on `0` | on `1` |
/// |-------|--------|--------|
/// | r0    | r0     | r1     |
/// | r1    | r2     | r0     |
/// | r2    | r1     | r2     |
pub fn residue_table() -> TransitionTable<Residue, char> {
    Residue::ALL
        .into_iter()
        .flat_map(|residue| {
            [
                (residue, '0', residue.shift_in(0)),
                (residue, '1', residue.shift_in(1)),
            ]
        })
        .collect()
}
