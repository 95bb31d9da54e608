/// The arith module applies one binary operator to two operands.
///
/// It is the only place where arithmetic is actually performed. Division by
/// zero is detected here; every other operator/operand combination of
/// `+ - * /` is total over `f64`.
///
/// # Responsibilities
/// - Applies `+ - * /` to a left and a right operand.
/// - Restores the original left/right ordering from stack pop order.
/// - Reports division by zero.
pub mod arith;
/// The core module reduces the token stream with two stacks.
///
/// This is the shunting-yard engine: an operand stack of numbers and an
/// operator stack of symbols, reduced iteratively as tokens arrive so that
/// no recursion and no syntax tree is ever needed. The operator stack is
/// seeded with a sentinel `(` and flushed by a final synthetic `)`.
///
/// # Responsibilities
/// - Owns the operand and operator stacks for one evaluation pass.
/// - Applies priority-driven, left-associative reduction per token.
/// - Checks the final state: one operand, no leftover operators.
pub mod core;
/// The literal module parses a numeric literal digit by digit.
///
/// It accumulates a maximal run of digits with at most one decimal point
/// into an `f64` magnitude, tolerating spaces between the characters of one
/// run, and applies the sign chosen by the scanner.
///
/// # Responsibilities
/// - Accumulates integer and fractional digits into a running value.
/// - Rejects a second decimal point inside one run.
/// - Applies the caller-supplied sign to the finished magnitude.
pub mod literal;
/// The scanner module tokenizes one line of input.
///
/// The scanner advances a cursor over the raw text and produces one token
/// at a time: a number (delegating to the literal parser) or an operator.
/// It also owns minus disambiguation, deciding from context whether a `-`
/// is a binary operator or the sign of the literal that follows.
///
/// # Responsibilities
/// - Classifies characters (operator, digit/point, whitespace) and skips
///   whitespace between tokens.
/// - Tracks whether the previous token represented a numeric value.
/// - Reports unrecognized symbols and dangling minus signs with their
///   column.
pub mod scanner;
/// The token module defines the vocabulary of the scanner.
///
/// A token is either a finished number or one of the six operator symbols.
/// Operators carry their priority as a total function over a closed enum,
/// so an unknown operator is unrepresentable.
///
/// # Responsibilities
/// - Defines the `Token` and `Operator` types.
/// - Maps operator symbols to their reduction priority.
pub mod token;
