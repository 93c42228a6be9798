use logos::Logos;
use tracing::trace;

use crate::{
    ast::{Expression, Symbol, Token},
    error::TokenizeError,
    interpreter::lexer::Lexeme,
};

/// Result type used by the tokenizer.
pub type TokenizeResult<T> = Result<T, TokenizeError>;

/// Appends `symbol` if the last emitted token is a completed term.
///
/// A term is a number or a closing bracket — what is inside the bracket
/// actually is a term. This realizes the implicit operators: an `Add`
/// between a term and a signed number whose separator was consumed as the
/// sign, and a `Mul` between a term and an opening bracket.
fn push_if_last_is_term(expr: &mut Expression, symbol: Symbol) {
    if let Some(Token::Number(_) | Token::Symbol(Symbol::Close)) = expr.last() {
        expr.push(Token::Symbol(symbol));
    }
}

/// Tokenizes source text into an ordered token sequence.
///
/// Characters are processed strictly left to right. The lexer recognizes
/// integer literals and the `+ - * / ^ ( )` characters; whitespace and any
/// unrecognized character are skipped without a token and without an error.
/// On top of the raw lexemes this function folds signs and inserts the
/// operators that adjacency implies:
///
/// - A minus sign toggles a pending-negation flag instead of emitting a
///   token; consecutive signs compose by cancellation, and the pending sign
///   folds into the next number. `1 - 2` tokenizes as `1 + (-2)` and
///   `1 - - 2` as `1 + 2`.
/// - A number or an opening bracket directly following a completed term
///   (a number or a closing bracket) is joined to it with an implicit `+`
///   or `*` respectively, so `10(5-3)` multiplies.
/// - A negated bracket becomes a `-1 *` prefix: `-(2+3)` reads as
///   `-1 * (2+3)`.
///
/// Bracket balance is validated here, before parsing starts: a closing
/// bracket below depth zero fails immediately, and unclosed brackets fail
/// at end of input.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The tokenized [`Expression`].
///
/// # Errors
/// - `UnmatchedClosing`: a `)` with no matching `(`.
/// - `MissingClosing`: the input ended with unclosed brackets.
/// - `InvalidNumberLiteral`: a digit run that overflows `i64`.
///
/// # Example
/// ```
/// use numex::{
///     ast::{Symbol, Token},
///     interpreter::tokenizer::tokenize,
/// };
///
/// let expr = tokenize("1 - 2").unwrap();
/// assert_eq!(expr,
///            vec![Token::Number(1), Token::Symbol(Symbol::Add), Token::Number(-2)]);
/// ```
pub fn tokenize(source: &str) -> TokenizeResult<Expression> {
    let mut expr = Expression::new();
    let mut negated = false;
    let mut depth: usize = 0;
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        match lexeme {
            Ok(Lexeme::Integer(magnitude)) => {
                push_if_last_is_term(&mut expr, Symbol::Add);
                expr.push(Token::Number(if negated { -magnitude } else { magnitude }));
                negated = false;
            },
            Ok(Lexeme::Minus) => {
                // adding a negative number is the same thing as subtracting
                // a positive one
                push_if_last_is_term(&mut expr, Symbol::Add);
                negated = !negated;
            },
            Ok(Lexeme::Plus) => expr.push(Token::Symbol(Symbol::Add)),
            Ok(Lexeme::Star) => expr.push(Token::Symbol(Symbol::Mul)),
            Ok(Lexeme::Slash) => expr.push(Token::Symbol(Symbol::Div)),
            Ok(Lexeme::Caret) => expr.push(Token::Symbol(Symbol::Exp)),
            Ok(Lexeme::LParen) => {
                if negated {
                    // here we have something like '... - ( ...', which is
                    // '... -1 * ( ...'
                    expr.push(Token::Number(-1));
                    negated = false;
                }
                push_if_last_is_term(&mut expr, Symbol::Mul);
                expr.push(Token::Symbol(Symbol::Open));
                depth += 1;
            },
            Ok(Lexeme::RParen) => {
                if depth == 0 {
                    return Err(TokenizeError::UnmatchedClosing { position: lexer.span().start });
                }
                expr.push(Token::Symbol(Symbol::Close));
                depth -= 1;
            },
            Ok(Lexeme::Ignored) => {},
            Err(()) => {
                let slice = lexer.slice();
                if !slice.is_empty() && slice.bytes().all(|b| b.is_ascii_digit()) {
                    // the integer callback rejected the digit run
                    return Err(TokenizeError::InvalidNumberLiteral { literal:  slice.to_string(),
                                                                     position: lexer.span().start, });
                }
                // unrecognized characters are skipped
            },
        }
    }

    if depth > 0 {
        return Err(TokenizeError::MissingClosing { count: depth });
    }
    trace!(?expr, "tokenized");
    Ok(expr)
}
