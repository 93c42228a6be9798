use crate::{
    ast::{Node, Operand, Symbol},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

impl Operand {
    /// Resolves the operand to its integer value, recursing into child
    /// nodes.
    ///
    /// # Errors
    /// Propagates any evaluation error from a child node.
    pub fn resolve(&self) -> EvalResult<i64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Child(node) => node.eval(),
        }
    }
}

impl Node {
    /// Evaluates the node's value bottom-up.
    ///
    /// Operands resolve first, then combine under the node's operator:
    ///
    /// - `Add`, `Mul`: checked 64-bit arithmetic.
    /// - `Div`: integer division truncating toward zero.
    /// - `Exp`: checked exponentiation; the exponent must be non-negative
    ///   since the result domain is integers.
    /// - `Null`: leaf pass-through; returns the left operand unchanged.
    ///
    /// Evaluation is pure: re-evaluating the same tree yields the same
    /// result.
    ///
    /// # Errors
    /// - `DivisionByZero`: the divisor is zero.
    /// - `InvalidExponent`: the exponent is negative.
    /// - `Overflow`: a result left the 64-bit integer range.
    /// - `UnknownOperator`, `MissingOperand`: the node violates the
    ///   parser's invariants; unreachable for trees built by
    ///   [`parse`](crate::interpreter::parser::parse).
    ///
    /// # Example
    /// ```
    /// use numex::interpreter::{parser::parse, tokenizer::tokenize};
    ///
    /// let tree = parse(tokenize("(10+8)*28/6").unwrap()).unwrap();
    /// assert_eq!(tree.eval().unwrap(), 84);
    /// ```
    pub fn eval(&self) -> EvalResult<i64> {
        let left = self.left.resolve()?;
        if self.operator == Symbol::Null {
            // leaf pass-through; `right` is absent by the parser's invariant
            return Ok(left);
        }
        let right = match &self.right {
            Some(operand) => operand.resolve()?,
            None => return Err(EvalError::MissingOperand { symbol: self.operator }),
        };

        match self.operator {
            Symbol::Add => left.checked_add(right).ok_or(EvalError::Overflow),
            Symbol::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
            Symbol::Div if right == 0 => Err(EvalError::DivisionByZero),
            Symbol::Div => left.checked_div(right).ok_or(EvalError::Overflow),
            Symbol::Exp if right < 0 => Err(EvalError::InvalidExponent { exponent: right }),
            Symbol::Exp => {
                let exponent = u32::try_from(right).map_err(|_| EvalError::Overflow)?;
                left.checked_pow(exponent).ok_or(EvalError::Overflow)
            },
            symbol => Err(EvalError::UnknownOperator { symbol }),
        }
    }
}
