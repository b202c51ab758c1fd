//! Binary modulo-3 residue calculator.
//!
//! Three states track the remainder of the digits read so far; reading
//! digit `d` in residue `r` moves to `(2r + d) mod 3`.

mod calculator;
mod error;
mod residue;

pub use calculator::ModuloThree;
pub use error::{CalculationError, DEFAULT_INVALID_MESSAGE};
pub use residue::{residue_table, Residue, BINARY_ALPHABET};
