use crate::{error::EvalError, evaluator::token::Operator};

/// Applies one binary operator to two operands.
///
/// `left` is the operand that was pushed first; the caller pops `right`
/// before `left` and is responsible for restoring that ordering, which
/// matters for `-` and `/`.
///
/// # Errors
/// Returns [`EvalError::DivisionByZero`] when `op` is `/` and `right` is
/// zero, and [`EvalError::IncompleteExpression`] when a parenthesis reaches
/// the executor, which a well-formed reduction never lets happen.
///
/// # Example
/// ```
/// use calyard::evaluator::{arith::apply, token::Operator};
///
/// assert_eq!(apply(Operator::Minus, 1.0, 4.0).unwrap(), -3.0);
/// assert_eq!(apply(Operator::Slash, 10.0, 4.0).unwrap(), 2.5);
/// assert!(apply(Operator::Slash, 1.0, 0.0).is_err());
/// ```
pub fn apply(op: Operator, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        Operator::Plus => Ok(left + right),
        Operator::Minus => Ok(left - right),
        Operator::Star => Ok(left * right),
        Operator::Slash => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Operator::LParen | Operator::RParen => Err(EvalError::IncompleteExpression),
    }
}
