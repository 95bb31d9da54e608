use crate::error::ParseError;

/// Accumulates a numeric literal one character at a time.
///
/// The builder keeps a running magnitude and, once a decimal point has been
/// seen, a fractional scale factor. The scanner feeds it every digit or `.`
/// of one maximal run and finally asks for the signed value.
///
/// # Example
/// ```
/// use calyard::evaluator::literal::NumberBuilder;
///
/// let mut builder = NumberBuilder::new();
/// for (i, c) in "10.25".char_indices() {
///     builder.push(c, i + 1).unwrap();
/// }
/// assert_eq!(builder.finish(-1.0), -10.25);
/// ```
#[derive(Debug, Default)]
pub struct NumberBuilder {
    value: f64,
    scale: f64,
    seen_point: bool,
}

impl NumberBuilder {
    /// Creates an empty builder with magnitude zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value:      0.0,
               scale:      1.0,
               seen_point: false, }
    }

    /// Consumes one character of the literal.
    ///
    /// Digits before the decimal point scale the running value by ten;
    /// digits after it are added at ever smaller fractional weights.
    ///
    /// # Errors
    /// Returns [`ParseError::MalformedNumberLiteral`] if `symbol` is a
    /// second decimal point within the same run, and
    /// [`ParseError::UnrecognizedSymbol`] if it is not a digit or `.` at
    /// all.
    pub fn push(&mut self, symbol: char, column: usize) -> Result<(), ParseError> {
        if symbol == '.' {
            if self.seen_point {
                return Err(ParseError::MalformedNumberLiteral { column });
            }
            self.seen_point = true;
            self.scale = 0.1;
            return Ok(());
        }

        let digit = symbol.to_digit(10)
                          .map(f64::from)
                          .ok_or(ParseError::UnrecognizedSymbol { symbol, column })?;

        if self.seen_point {
            self.value += digit * self.scale;
            self.scale /= 10.0;
        } else {
            self.value = self.value * 10.0 + digit;
        }

        Ok(())
    }

    /// Finishes the literal, applying the sign chosen by the scanner.
    #[must_use]
    pub fn finish(self, sign: f64) -> f64 {
        self.value * sign
    }
}
