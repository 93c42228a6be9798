use numex::{
    ast::{Node, Symbol, Token},
    error::{EvalError, ParseError, TokenizeError},
    evaluate,
    interpreter::{parser::parse, tokenizer::tokenize},
};

fn assert_evaluates(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(result) => assert_eq!(result, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_fails(src: &str) {
    if evaluate(src).is_ok() {
        panic!("Expression {src:?} succeeded but was expected to fail")
    }
}

fn eval_error(src: &str) -> EvalError {
    parse(tokenize(src).unwrap()).unwrap()
                                 .eval()
                                 .unwrap_err()
}

fn parse_error(src: &str) -> ParseError {
    parse(tokenize(src).unwrap()).unwrap_err()
}

fn num(value: i64) -> Token {
    Token::Number(value)
}

fn sym(symbol: Symbol) -> Token {
    Token::Symbol(symbol)
}

#[test]
fn tokenizes_explicit_operators() {
    use Symbol::{Add, Div};

    assert_eq!(tokenize("1+2").unwrap(), vec![num(1), sym(Add), num(2)]);
    assert_eq!(tokenize("1+2+3").unwrap(),
               vec![num(1), sym(Add), num(2), sym(Add), num(3)]);
    assert_eq!(tokenize("10 / 3").unwrap(), vec![num(10), sym(Div), num(3)]);
}

#[test]
fn subtraction_folds_into_a_signed_number() {
    use Symbol::{Add, Div};

    assert_eq!(tokenize("1+2-3").unwrap(),
               vec![num(1), sym(Add), num(2), sym(Add), num(-3)]);
    assert_eq!(tokenize("1234-4321").unwrap(), vec![num(1234), sym(Add), num(-4321)]);
    assert_eq!(tokenize("10 / -3").unwrap(), vec![num(10), sym(Div), num(-3)]);
}

#[test]
fn negated_bracket_becomes_minus_one_times() {
    use Symbol::{Add, Close, Mul, Open};

    assert_eq!(tokenize("10 - (5 - 3)").unwrap(),
               vec![num(10),
                    sym(Add),
                    num(-1),
                    sym(Mul),
                    sym(Open),
                    num(5),
                    sym(Add),
                    num(-3),
                    sym(Close)]);
    assert_eq!(tokenize("10 + (5 - 3)").unwrap(),
               vec![num(10), sym(Add), sym(Open), num(5), sym(Add), num(-3), sym(Close)]);
}

#[test]
fn juxtaposition_inserts_multiplication_tokens() {
    use Symbol::{Add, Close, Mul, Open};

    assert_eq!(tokenize("10(5 - 3)").unwrap(),
               vec![num(10), sym(Mul), sym(Open), num(5), sym(Add), num(-3), sym(Close)]);
    assert_eq!(tokenize("10(5 - 3)(4 + 3)").unwrap(),
               vec![num(10),
                    sym(Mul),
                    sym(Open),
                    num(5),
                    sym(Add),
                    num(-3),
                    sym(Close),
                    sym(Mul),
                    sym(Open),
                    num(4),
                    sym(Add),
                    num(3),
                    sym(Close)]);
}

#[test]
fn bracket_mismatches_are_reported() {
    assert!(matches!(tokenize("10 (10 + 1"),
                     Err(TokenizeError::MissingClosing { count: 1 })));
    assert!(matches!(tokenize("10 (10 + 1))"),
                     Err(TokenizeError::UnmatchedClosing { .. })));
    assert!(matches!(tokenize("10) (10 + 1)"),
                     Err(TokenizeError::UnmatchedClosing { position: 2 })));
    assert!(matches!(tokenize("((1 + 2)"),
                     Err(TokenizeError::MissingClosing { count: 1 })));
}

#[test]
fn oversized_literals_do_not_tokenize() {
    assert!(matches!(tokenize("9223372036854775808"),
                     Err(TokenizeError::InvalidNumberLiteral { .. })));
    assert!(matches!(tokenize("-9223372036854775808"),
                     Err(TokenizeError::InvalidNumberLiteral { .. })));
    assert_evaluates("9223372036854775807", i64::MAX);
}

#[test]
fn precedence_shapes_the_tree() {
    let tree = parse(tokenize("1+2*3").unwrap()).unwrap();
    assert_eq!(tree,
               Node::branch(1, Symbol::Add, Node::branch(2, Symbol::Mul, 3)));

    let tree = parse(tokenize("(1+2)*3").unwrap()).unwrap();
    assert_eq!(tree,
               Node::branch(Node::branch(1, Symbol::Add, 2), Symbol::Mul, 3));

    let tree = parse(tokenize("10+59*32/4").unwrap()).unwrap();
    assert_eq!(tree,
               Node::branch(10,
                            Symbol::Add,
                            Node::branch(Node::branch(59, Symbol::Mul, 32), Symbol::Div, 4)));

    let tree = parse(tokenize("(10*(1+3))+1").unwrap()).unwrap();
    assert_eq!(tree,
               Node::branch(Node::branch(10, Symbol::Mul, Node::branch(1, Symbol::Add, 3)),
                            Symbol::Add,
                            1));
}

#[test]
fn single_numbers_parse_to_leaves() {
    assert_eq!(parse(tokenize("1").unwrap()).unwrap(), Node::leaf(1));
    assert_eq!(parse(tokenize("(10)").unwrap()).unwrap(), Node::leaf(10));
    assert_evaluates("1", 1);
}

#[test]
fn arithmetic_results() {
    assert_evaluates("1+2", 3);
    assert_evaluates("1+2*3", 7);
    assert_evaluates("10+59*32/4", 482);
    assert_evaluates("(10+8)*28/6", 84);
    assert_evaluates("12*43+32*-35", 12 * 43 + 32 * -35);
    assert_evaluates("(10*(22+4)-10/(4/2))+11", (10 * (22 + 4) - 10 / (4 / 2)) + 11);
    assert_evaluates("1+2+3+4+5+6+7+8+9+10", 55);
    assert_evaluates("1*2*3*4*5*6*7*8*9*10", 3_628_800);
}

#[test]
fn signs_compose_by_cancellation() {
    assert_evaluates("1 - 2", -1);
    assert_evaluates("1 - - 2", 3);
    assert_evaluates("1 - - - 2", -1);
}

#[test]
fn juxtaposition_multiplies() {
    assert_evaluates("20(10 + 2)", 240);
    assert_evaluates("10(5-3)(4+3)", 140);
    assert_evaluates("-20(10 + 2)*-3", 720);
    assert_evaluates("-(2+3)", -5);
}

#[test]
fn exponent_is_left_associative() {
    assert_evaluates("2^10", 1024);
    assert_evaluates("2^3^2", 64);
    assert_evaluates("2*3^2", 18);
    // the sign binds to the literal, so the base is -2
    assert_evaluates("-2^2", 4);
    assert_evaluates("2^0", 1);
}

#[test]
fn division_truncates_toward_zero() {
    assert_evaluates("7/2", 3);
    assert_evaluates("-7/2", -3);
    assert_evaluates("10 / -3", -3);
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_error("5/0"), EvalError::DivisionByZero);
    assert_eq!(eval_error("1/(2-2)"), EvalError::DivisionByZero);
}

#[test]
fn negative_exponents_are_rejected() {
    assert_eq!(eval_error("2^-1"), EvalError::InvalidExponent { exponent: -1 });
}

#[test]
fn overflow_is_detected() {
    assert_eq!(eval_error("9223372036854775807+1"), EvalError::Overflow);
    assert_eq!(eval_error("2^64"), EvalError::Overflow);
    assert_eq!(eval_error("(-9223372036854775807-1)/-1"), EvalError::Overflow);
}

#[test]
fn malformed_sequences_do_not_parse() {
    assert_eq!(parse_error(""), ParseError::InvalidExpression { remaining: 0 });
    assert_eq!(parse_error("*1"), ParseError::MismatchedOperand { symbol: Symbol::Mul });
    assert_eq!(parse_error("1+"), ParseError::MismatchedOperand { symbol: Symbol::Add });
    assert_eq!(parse_error("1+*2"), ParseError::MismatchedOperand { symbol: Symbol::Mul });
    assert_eq!(parse_error("5**3"), ParseError::MismatchedOperand { symbol: Symbol::Mul });
    assert_fails("");
}

#[test]
fn unrecognized_characters_are_skipped() {
    assert_evaluates("[1 + 2]", 3);
    assert_evaluates("1 + x2", 3);
    assert_evaluates("  20 ( 10+2 )  ", 240);
}

#[test]
fn re_evaluating_the_same_tree_is_stable() {
    let tree = parse(tokenize("10+59*32/4").unwrap()).unwrap();
    assert_eq!(tree.eval().unwrap(), 482);
    assert_eq!(tree.eval().unwrap(), 482);
}
