#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum TokenizeError {
    /// The input ended with at least one bracket still open.
    MissingClosing {
        /// How many opening brackets were never closed.
        count: usize,
    },
    /// A closing bracket appeared with no matching opening bracket.
    UnmatchedClosing {
        /// Byte offset of the stray bracket in the source.
        position: usize,
    },
    /// A numeric literal could not be represented as a 64-bit integer.
    InvalidNumberLiteral {
        /// The offending digit run.
        literal:  String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingClosing { count } => {
                write!(f, "Missing closing bracket: {count} left open at end of input.")
            },
            Self::UnmatchedClosing { position } => {
                write!(f, "Extra closing bracket found at position {position}.")
            },
            Self::InvalidNumberLiteral { literal, position } => write!(f,
                                                                      "Number literal '{literal}' at position {position} does not fit in a 64-bit integer."),
        }
    }
}

impl std::error::Error for TokenizeError {}
