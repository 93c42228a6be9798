use crate::ast::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Attempted division by zero.
    DivisionByZero,
    /// Exponentiation by a negative exponent; the result would leave the
    /// integers.
    InvalidExponent {
        /// The rejected exponent.
        exponent: i64,
    },
    /// An arithmetic result overflowed the 64-bit integer range.
    Overflow,
    /// A symbol that is not an arithmetic operator reached operator
    /// position. Unreachable for trees built by the parser.
    UnknownOperator {
        /// The offending symbol.
        symbol: Symbol,
    },
    /// A non-leaf node was missing its right operand. Unreachable for trees
    /// built by the parser.
    MissingOperand {
        /// The operator whose operand is absent.
        symbol: Symbol,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidExponent { exponent } => {
                write!(f, "Exponent {exponent} is negative; results are restricted to integers.")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::UnknownOperator { symbol } => {
                write!(f, "Invalid operator '{symbol}' in node.")
            },
            Self::MissingOperand { symbol } => {
                write!(f, "Operator '{symbol}' has no right operand.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
