/// Represents one of the six recognized operator symbols.
///
/// The enum is closed: every operator that can appear on the operator stack
/// is listed here, so priority lookup is a total function and there is no
/// "unknown operator" case at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Operator {
    /// Returns the reduction priority of the operator.
    ///
    /// A lower value means tighter binding: `*` and `/` (1) reduce before
    /// `+` and `-` (2). Parentheses rank 3 so that a pending `(` never
    /// satisfies the reduction test against a binary operator and always
    /// stops reduction at its boundary.
    ///
    /// # Example
    /// ```
    /// use calyard::evaluator::token::Operator;
    ///
    /// assert!(Operator::Star.priority() < Operator::Plus.priority());
    /// assert!(Operator::LParen.priority() > Operator::Minus.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Star | Self::Slash => 1,
            Self::Plus | Self::Minus => 2,
            Self::LParen | Self::RParen => 3,
        }
    }

    /// Returns the source character of the operator, for diagnostics.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }

    /// Classifies a character as an operator, if it is one.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token produced by the scanner.
///
/// Tokens are transient: each one is consumed by the evaluator as soon as
/// it is produced and never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A finished numeric literal, sign already applied.
    Number(f64),
    /// One of the six operator symbols.
    Operator(Operator),
}
