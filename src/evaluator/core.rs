use crate::{
    error::EvalError,
    evaluator::{
        arith,
        scanner::Scanner,
        token::{Operator, Token},
    },
};

/// One shunting-yard evaluation pass over a single line.
///
/// The pass owns an operand stack of numbers and an operator stack of
/// symbols, both private to it. The operator stack is seeded with a
/// sentinel `(`; when the scanner runs dry a matching synthetic `)` flushes
/// everything still pending. Reduction is iterative throughout, so the call
/// depth never grows with parenthesis nesting.
///
/// # Example
/// ```
/// use calyard::evaluator::core::Evaluation;
///
/// assert_eq!(Evaluation::new("1+2*3").run().unwrap(), 7.0);
/// assert_eq!(Evaluation::new("(1+2)*3").run().unwrap(), 9.0);
/// ```
pub struct Evaluation<'a> {
    scanner: Scanner<'a>,
    operands: Vec<f64>,
    operators: Vec<Operator>,
}

impl<'a> Evaluation<'a> {
    /// Creates a pass over `line` with the sentinel `(` already in place.
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self { scanner:   Scanner::new(line),
               operands:  Vec::new(),
               operators: vec![Operator::LParen], }
    }

    /// Runs the pass to completion and returns the single remaining value.
    ///
    /// # Errors
    /// Returns any scanner error as-is, and an [`EvalError`] when the
    /// stacks cannot be reduced to exactly one operand: division by zero,
    /// an unmatched parenthesis on either side, or an expression with
    /// missing or leftover parts.
    pub fn run(mut self) -> Result<f64, Box<dyn std::error::Error>> {
        while let Some(token) = self.scanner.next_token()? {
            match token {
                Token::Number(value) => self.operands.push(value),
                Token::Operator(Operator::LParen) => self.operators.push(Operator::LParen),
                Token::Operator(Operator::RParen) => self.close_group()?,
                Token::Operator(op) => self.push_operator(op)?,
            }
        }

        // Synthetic `)` matching the seeded sentinel `(`.
        self.close_group()?;

        if !self.operators.is_empty() {
            return Err(Box::new(EvalError::UnmatchedParenthesis));
        }

        match (self.operands.pop(), self.operands.pop()) {
            (Some(result), None) => Ok(result),
            _ => Err(Box::new(EvalError::IncompleteExpression)),
        }
    }

    /// Handles a precedence-bearing operator.
    ///
    /// Pending operators with the same or higher precedence (same or lower
    /// priority value) are applied first, which makes equal-priority runs
    /// reduce left to right. The parenthesis priority never passes the
    /// test, so a pending `(` stops the loop on its own.
    fn push_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        while let Some(&top) = self.operators.last() {
            if top.priority() > op.priority() {
                break;
            }
            self.operators.pop();
            self.apply(top)?;
        }

        self.operators.push(op);
        Ok(())
    }

    /// Flushes pending operators until the matching `(` is discarded.
    fn close_group(&mut self) -> Result<(), EvalError> {
        loop {
            match self.operators.pop() {
                None => return Err(EvalError::UnmatchedParenthesis),
                Some(Operator::LParen) => return Ok(()),
                Some(op) => self.apply(op)?,
            }
        }
    }

    /// Pops two operands, applies `op`, and pushes the result back.
    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        let right = self.operands.pop().ok_or(EvalError::IncompleteExpression)?;
        let left = self.operands.pop().ok_or(EvalError::IncompleteExpression)?;

        self.operands.push(arith::apply(op, left, right)?);
        Ok(())
    }
}
