#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
pub enum ParseError {
    /// Found a character that is neither whitespace, a digit, `.`, nor a
    /// known operator.
    UnrecognizedSymbol {
        /// The offending character.
        symbol: char,
        /// The 1-based column where the character was found.
        column: usize,
    },
    /// A numeric literal contained more than one decimal point.
    MalformedNumberLiteral {
        /// The 1-based column of the second decimal point.
        column: usize,
    },
    /// A `-` was not followed by a valid operand or operator context.
    DanglingMinus {
        /// The 1-based column of the minus sign.
        column: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedSymbol { symbol, column } => {
                write!(f, "Error at column {column}: Unrecognized symbol: {symbol}.")
            },

            Self::MalformedNumberLiteral { column } => write!(f,
                                                              "Error at column {column}: Number literal contains a second decimal point."),

            Self::DanglingMinus { column } => {
                write!(f, "Error at column {column}: '-' is not followed by an operand.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
