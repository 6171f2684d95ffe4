#[derive(Debug)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// The parser required a specific token and found another.
    ExpectedToken {
        /// What the parser expected to see.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token at the start of an expression cannot begin one.
    NoPrefixParse {
        /// The offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit into a signed 64-bit integer.
    IntegerOutOfRange {
        /// The raw digit lexeme.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected, found, line } => write!(f,
                                                                   "Error on line {line}: expected next token to be {expected}, got {found}."),

            Self::NoPrefixParse { token, line } => {
                write!(f, "Error on line {line}: no prefix parse function for {token}.")
            },

            Self::IntegerOutOfRange { literal, line } => {
                write!(f, "Error on line {line}: cannot parse {literal} as integer.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
