#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while reducing the stacks.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero,
    /// A `)` had no corresponding open `(`, or an unclosed `(` remained
    /// after the final flush.
    UnmatchedParenthesis,
    /// Evaluation did not end with exactly one value on the operand stack.
    IncompleteExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
            Self::UnmatchedParenthesis => write!(f, "Error: Unmatched parenthesis."),
            Self::IncompleteExpression => {
                write!(f, "Error: Expression does not reduce to a single value.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
