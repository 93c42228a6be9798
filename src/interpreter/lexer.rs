use logos::Logos;

/// Represents a raw lexical unit recognized directly in source text.
///
/// Lexemes are the lexer's unprocessed output: digit runs grouped into
/// integer literals, plus the operator and bracket characters. They carry
/// no knowledge of implicit operators or sign folding; the tokenizer
/// derives those while assembling an
/// [`Expression`](crate::ast::Expression).
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// Integer literal lexemes, such as `42`. The magnitude is always
    /// non-negative; signs are separate [`Minus`](Self::Minus) lexemes. The
    /// callback fails on magnitudes that do not fit in an `i64`.
    #[regex(r"[0-9]+", parse_magnitude)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses an integer literal from the current lexeme slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current lexeme.
///
/// # Returns
/// - `Some(i64)`: The parsed magnitude if it fits.
/// - `None`: If the digit run overflows `i64`; the lexeme then surfaces as
///   an error carrying the original slice.
fn parse_magnitude(lex: &logos::Lexer<Lexeme>) -> Option<i64> {
    lex.slice().parse().ok()
}
