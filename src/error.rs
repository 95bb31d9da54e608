/// Scanning errors.
///
/// Defines all error types that can occur while tokenizing a line. Parse
/// errors include unrecognized symbols, malformed numeric literals, and a
/// minus sign with nothing valid after it.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing the stacks.
/// Evaluation errors include division by zero, unbalanced parentheses, and
/// expressions that do not reduce to exactly one value.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
