/// Tokenization errors.
///
/// Defines all error types that can occur while turning source text into a
/// token sequence: bracket imbalance in either direction and numeric
/// literals that overflow the integer range.
pub mod tokenize_error;
/// Parsing errors.
///
/// Contains the error types raised while reducing a token sequence into a
/// tree: sequences that do not collapse to a single term, and operators
/// missing a usable neighbor.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while folding a parsed tree
/// into its result, such as division by zero, negative exponents and
/// integer overflow.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;
pub use tokenize_error::TokenizeError;
