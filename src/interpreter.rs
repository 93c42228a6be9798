/// The lexer module recognizes raw lexemes in source text.
///
/// The lexer reads the raw source and produces a stream of lexemes, each
/// corresponding to an integer literal or one of the operator and bracket
/// characters. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Groups digit runs into integer literals.
/// - Recognizes the `+ - * / ^ ( )` characters.
/// - Skips whitespace; anything else surfaces as an error lexeme for the
///   tokenizer to dispose of.
pub mod lexer;
/// The tokenizer module assembles lexemes into a token sequence.
///
/// The tokenizer drives the lexer and produces an
/// [`Expression`](crate::ast::Expression): numbers with their signs folded
/// in, and the operator symbols, explicit ones as written and implicit ones
/// derived from juxtaposition.
///
/// # Responsibilities
/// - Folds unary minus into number signs, composing consecutive signs.
/// - Inserts the implicit `+` and `*` that adjacency implies.
/// - Validates bracket balance before parsing starts.
pub mod tokenizer;
/// The parser module reduces a token sequence into a tree of nodes.
///
/// The parser is a repeated-reduction rewriting system: bracketed spans
/// collapse first through recursion, then each operator tier is reduced to
/// fixpoint in precedence order, leftmost occurrence first.
///
/// # Responsibilities
/// - Resolves nested brackets recursively.
/// - Applies precedence (`^` before `*` `/` before `+`) and left
///   associativity by reduction order.
/// - Yields exactly one root [`Node`](crate::ast::Node) or a typed error.
pub mod parser;
/// The evaluator module folds a parsed tree into its integer result.
///
/// # Responsibilities
/// - Resolves operands bottom-up, recursing into child nodes.
/// - Applies checked 64-bit arithmetic for every operator.
/// - Reports division by zero, negative exponents and overflow as typed
///   errors.
pub mod evaluator;
