use std::{iter::Peekable, str::Chars};

use crate::{
    error::ParseError,
    evaluator::{
        literal::NumberBuilder,
        token::{Operator, Token},
    },
};

/// Tells whether a character can belong to a numeric literal.
#[must_use]
pub const fn is_part_of_number(symbol: char) -> bool {
    symbol.is_ascii_digit() || symbol == '.'
}

/// Produces tokens from one line of input, one at a time.
///
/// The scanner advances a character cursor, skipping whitespace between
/// tokens, and remembers whether the previous token represented a numeric
/// value (a number literal or a closing parenthesis). That flag is what
/// disambiguates a binary minus from the sign of a literal.
///
/// # Example
/// ```
/// use calyard::evaluator::{
///     scanner::Scanner,
///     token::{Operator, Token},
/// };
///
/// let mut scanner = Scanner::new(" 1 + 2");
/// assert_eq!(scanner.next_token().unwrap(), Some(Token::Number(1.0)));
/// assert_eq!(scanner.next_token().unwrap(),
///            Some(Token::Operator(Operator::Plus)));
/// assert_eq!(scanner.next_token().unwrap(), Some(Token::Number(2.0)));
/// assert_eq!(scanner.next_token().unwrap(), None);
/// ```
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    column: usize,
    last_was_number: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the first character of `line`.
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self { chars:           line.chars().peekable(),
               column:          1,
               last_was_number: false, }
    }

    /// Produces the next token, or `None` once the line is exhausted.
    ///
    /// # Errors
    /// Returns [`ParseError::UnrecognizedSymbol`] for a character that is
    /// neither whitespace, a digit, `.`, nor a known operator, and
    /// propagates literal and minus errors from the helpers.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        self.skip_spaces();

        let Some(symbol) = self.peek() else {
            return Ok(None);
        };

        if symbol == '-' {
            return self.scan_minus().map(Some);
        }

        if let Some(op) = Operator::from_symbol(symbol) {
            self.bump();
            // A `)` closes a numeric value, so a `-` right after it is a
            // binary operator, not a sign.
            self.last_was_number = op == Operator::RParen;
            return Ok(Some(Token::Operator(op)));
        }

        if is_part_of_number(symbol) {
            return Ok(Some(Token::Number(self.scan_number(1.0)?)));
        }

        Err(ParseError::UnrecognizedSymbol { symbol,
                                             column: self.column })
    }

    /// Disambiguates a `-` at the cursor.
    ///
    /// After a numeric context the minus is a binary operator. Otherwise it
    /// is a sign, and a run of consecutive minus signs collapses into one
    /// sign for the literal that follows, so `--3` is double negation.
    fn scan_minus(&mut self) -> Result<Token, ParseError> {
        let minus_column = self.column;
        self.bump();
        self.skip_spaces();

        match self.peek() {
            Some(next) if is_part_of_number(next) && self.last_was_number => {
                self.last_was_number = false;
                Ok(Token::Operator(Operator::Minus))
            },

            Some(next) if is_part_of_number(next) => Ok(Token::Number(self.scan_number(-1.0)?)),

            Some('-') if !self.last_was_number => {
                let mut sign = -1.0;
                while self.peek() == Some('-') {
                    sign = -sign;
                    self.bump();
                    self.skip_spaces();
                }
                match self.peek() {
                    Some(next) if is_part_of_number(next) => {
                        Ok(Token::Number(self.scan_number(sign)?))
                    },
                    _ => Err(ParseError::DanglingMinus { column: minus_column }),
                }
            },

            Some(next) if Operator::from_symbol(next).is_some() => {
                self.last_was_number = false;
                Ok(Token::Operator(Operator::Minus))
            },

            _ => Err(ParseError::DanglingMinus { column: minus_column }),
        }
    }

    /// Consumes a maximal digit/point run and finishes it with `sign`.
    ///
    /// Spaces between the characters of one run are skipped, matching the
    /// scan discipline used everywhere else, so `"1 2"` is the literal 12.
    fn scan_number(&mut self, sign: f64) -> Result<f64, ParseError> {
        let mut builder = NumberBuilder::new();

        while let Some(symbol) = self.peek() {
            if !is_part_of_number(symbol) {
                break;
            }
            builder.push(symbol, self.column)?;
            self.bump();
            self.skip_spaces();
        }

        self.last_was_number = true;
        Ok(builder.finish(sign))
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.bump();
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) {
        if self.chars.next().is_some() {
            self.column += 1;
        }
    }
}
