//! Binary Modulo 3 Calculator
//!
//! This example is a thin caller of the calculator: it reads binary numbers
//! from the command line (or one per line from stdin) and prints the
//! remainder the way an interactive front end would.
//!
//! Key concepts:
//! - One calculator built at startup and passed where it is needed
//! - Validation errors rendered as text, never panics
//! - Logging controlled by `RUST_LOG`
//!
//! Run with: cargo run --example modulo_three -- 1100 1010 102

use residue_fsm::modulo::ModuloThree;
use std::io::BufRead;
use tracing_subscriber::EnvFilter;

fn describe(calculator: &ModuloThree, input: &str) -> String {
    match calculator.remainder(input) {
        Ok(remainder) => match u128::from_str_radix(input, 2) {
            Ok(decimal) => format!("{remainder} ({input} = {decimal} in decimal)"),
            Err(_) => format!("{remainder} ({input} is too large to show in decimal)"),
        },
        Err(error) => format!("Error: {error}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calculator = ModuloThree::new()?;

    println!("=== Binary Modulo 3 Calculator ===\n");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            println!("Remainder when divided by 3: {}", describe(&calculator, &line));
        }
    } else {
        for input in &args {
            println!("Remainder when divided by 3: {}", describe(&calculator, input));
        }
    }

    Ok(())
}
