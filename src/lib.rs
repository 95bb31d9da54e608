//! # calyard
//!
//! calyard is a one-shot evaluator for single-line infix arithmetic written
//! in Rust. It reads one line containing decimal numbers, the binary
//! operators `+ - * /`, parentheses and unary minus, and reduces it directly
//! to an `f64` with a dual-stack shunting-yard pass. No syntax tree is ever
//! built.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::evaluator::core::Evaluation;

/// Provides unified error types for scanning and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// reducing a line. It standardizes error reporting and carries the column
/// position of lexical failures for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, evaluator).
/// - Attaches column numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together the scanner, the number literal parser, the
/// dual-stack reduction engine and the arithmetic executor to turn one line
/// of infix text into a numeric result. It exposes the types behind the
/// crate-level entry points.
///
/// # Responsibilities
/// - Coordinates all core components: scanner, literal parser, stacks,
///   arithmetic.
/// - Provides the single-pass evaluation state machine.
/// - Manages the flow of data and errors between phases.
pub mod evaluator;

/// Evaluates one line of infix arithmetic to a number.
///
/// The line is scanned and reduced in a single pass. Any failure (an
/// unrecognized symbol, a malformed literal, a dangling minus, unbalanced
/// parentheses, division by zero or an incomplete expression) aborts the
/// pass immediately and is returned as an error; no partial result is ever
/// produced.
///
/// # Errors
/// Returns an error if the line cannot be tokenized or does not reduce to
/// exactly one value.
///
/// # Examples
/// ```
/// use calyard::evaluate_line;
///
/// assert_eq!(evaluate_line("1+2*3").unwrap(), 7.0);
/// assert_eq!(evaluate_line("(1+2)*3").unwrap(), 9.0);
/// assert_eq!(evaluate_line("-5 + 3").unwrap(), -2.0);
///
/// // Division by zero is always an error, wherever it occurs.
/// assert!(evaluate_line("(1+1)/(2-2)").is_err());
/// ```
pub fn evaluate_line(line: &str) -> Result<f64, Box<dyn std::error::Error>> {
    let result = Evaluation::new(line).run()?;
    Ok(result)
}

/// Evaluates one line and renders it for display.
///
/// On success the result is formatted with exactly two digits after the
/// decimal point, in fixed-point notation. Every failure collapses to the
/// literal marker `[error]`; no detail about the failure kind is surfaced.
///
/// # Examples
/// ```
/// use calyard::render_line;
///
/// assert_eq!(render_line("10/4"), "2.50");
/// assert_eq!(render_line("2/0"), "[error]");
/// assert_eq!(render_line("((1+2)"), "[error]");
/// ```
#[must_use]
pub fn render_line(line: &str) -> String {
    match evaluate_line(line) {
        Ok(result) => format!("{result:.2}"),
        Err(_) => String::from("[error]"),
    }
}
