//! # numex
//!
//! numex is an integer arithmetic expression evaluator written in Rust.
//! It understands the operators `+ - * / ^`, parentheses, unary minus and
//! implicit multiplication by juxtaposition, and computes results over
//! signed 64-bit integers.
//!
//! Evaluation is a linear three-stage pipeline: the tokenizer turns
//! characters into a token sequence, the parser rewrites that sequence into
//! a binary expression tree, and the evaluator folds the tree into a single
//! integer. Every stage is pure and synchronous, and returns its first
//! failure as a typed error.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of tokenized and parsed expressions.
///
/// This module declares the [`Symbol`](ast::Symbol), [`Token`](ast::Token)
/// and [`Node`](ast::Node) types that represent an expression at each stage
/// of the pipeline: the flat token sequence the tokenizer emits, and the
/// binary tree the parser builds from it.
///
/// # Responsibilities
/// - Defines the closed operator tag set and the token union.
/// - Defines the owned binary tree with its closed operand union.
pub mod ast;
/// Provides per-stage error types.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing or evaluating an expression. Each stage has its own enum; every
/// failure is returned to the caller immediately, with no partial results
/// and no recovery mode.
///
/// # Responsibilities
/// - Defines error enums for all failure modes of the three stages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the pipeline from source text to result.
///
/// This module ties together the lexer, tokenizer, parser and evaluator.
/// Control flow is linear — tokenizer, then parser, then evaluator — and no
/// component depends on ones that run after it.
///
/// # Responsibilities
/// - Coordinates the pipeline stages.
/// - Provides the per-stage entry points for granular use.
pub mod interpreter;

/// Evaluates an expression string to its integer result.
///
/// This is the crate's main entry point. The source is tokenized, parsed
/// into a tree and evaluated; the first error from any stage is returned
/// boxed.
///
/// # Errors
/// Returns an error if tokenization, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use numex::evaluate;
///
/// // Juxtaposition multiplies.
/// let result = evaluate("20(10 + 2)").unwrap();
/// assert_eq!(result, 240);
///
/// // A minus sign folds into the number that follows it.
/// assert_eq!(evaluate("1 - - 2").unwrap(), 3);
///
/// // Division by zero is a typed error, not a crash.
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let expr = interpreter::tokenizer::tokenize(source)?;
    let tree = interpreter::parser::parse(expr)?;
    let result = tree.eval()?;
    Ok(result)
}
