//! # Command line calculator
//!
//! Evaluates a single operation on exact rational numbers and prints the result both as a fraction
//! and as an approximate decimal. Set `RUST_LOG=debug` to see the parsed operands.
use std::cmp::Ordering;
use std::error::Error;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use relp_rational::{Parse, Rational64};

#[derive(Parser, Debug)]
#[clap(name = "relp-rational", version, about = "Exact arithmetic on fractions")]
struct Arguments {
    #[clap(subcommand)]
    operation: Operation,
}

/// Operands are written as `N/D`, `N` or a decimal like `-1.25`.
#[derive(Subcommand, Debug)]
enum Operation {
    /// Sum of two values
    Add {
        #[clap(allow_hyphen_values = true)]
        left: String,
        #[clap(allow_hyphen_values = true)]
        right: String,
    },
    /// Difference of two values
    Sub {
        #[clap(allow_hyphen_values = true)]
        left: String,
        #[clap(allow_hyphen_values = true)]
        right: String,
    },
    /// Product of two values
    Mul {
        #[clap(allow_hyphen_values = true)]
        left: String,
        #[clap(allow_hyphen_values = true)]
        right: String,
    },
    /// Quotient of two values
    Div {
        #[clap(allow_hyphen_values = true)]
        left: String,
        #[clap(allow_hyphen_values = true)]
        right: String,
    },
    /// Compare two values, printing -1, 0 or 1
    Cmp {
        #[clap(allow_hyphen_values = true)]
        left: String,
        #[clap(allow_hyphen_values = true)]
        right: String,
    },
    /// Raise a value to an integer power
    Pow {
        #[clap(allow_hyphen_values = true)]
        base: String,
        #[clap(allow_hyphen_values = true)]
        exponent: i32,
    },
    /// Multiplicative inverse of a value
    Recip {
        #[clap(allow_hyphen_values = true)]
        value: String,
    },
}

enum Evaluation {
    Value(Rational64),
    Ordering(Ordering),
}

/// Read an operand from the command line.
fn operand(text: &str) -> Result<Rational64, Parse> {
    let value = text.parse()?;
    debug!(text, %value, "parsed operand");

    Ok(value)
}

/// Compute the result of the requested operation.
///
/// # Errors
///
/// When an operand can't be read, or when the result can't be represented.
fn evaluate(operation: &Operation) -> Result<Evaluation, Box<dyn Error>> {
    let value = match operation {
        Operation::Add { left, right } => operand(left)?.checked_add(operand(right)?)?,
        Operation::Sub { left, right } => operand(left)?.checked_sub(operand(right)?)?,
        Operation::Mul { left, right } => operand(left)?.checked_mul(operand(right)?)?,
        Operation::Div { left, right } => operand(left)?.checked_div(operand(right)?)?,
        Operation::Cmp { left, right } => {
            return Ok(Evaluation::Ordering(operand(left)?.cmp(&operand(right)?)));
        },
        Operation::Pow { base, exponent } => operand(base)?.pow(*exponent)?,
        Operation::Recip { value } => operand(value)?.recip()?,
    };

    Ok(Evaluation::Value(value))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let arguments = Arguments::parse();
    debug!(operation = ?arguments.operation, "evaluating");

    match evaluate(&arguments.operation) {
        Ok(Evaluation::Value(value)) => {
            println!("{}", value);
            println!("{}", value.decimal());
            ExitCode::SUCCESS
        },
        Ok(Evaluation::Ordering(ordering)) => {
            println!("{}", ordering as i8);
            ExitCode::SUCCESS
        },
        Err(error) => {
            error!(%error, "evaluation failed");
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        },
    }
}
