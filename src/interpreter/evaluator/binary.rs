use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation on two values.
    ///
    /// Dispatch, in order:
    /// - two integers: full arithmetic and comparison,
    /// - two strings: `+` concatenates, every other operator is an error,
    /// - `==`/`!=` on anything else: identity comparison (booleans and
    ///   `null` compare the intuitive way; two distinct arrays are never
    ///   equal),
    /// - differing operand types: a type mismatch error,
    /// - anything else (e.g. `true + false`): an unknown operator error.
    ///
    /// # Parameters
    /// - `op`: Binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_binary(BinaryOperator::Add,
    ///                              &Value::Integer(2),
    ///                              &Value::Integer(3),
    ///                              1).unwrap();
    ///
    /// assert_eq!(v, Value::Integer(5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => Self::eval_integer_binary(op, *l, *r, line),
            (Value::Str(l), Value::Str(r)) => Self::eval_string_binary(op, l, r, line),
            _ if op == BinaryOperator::Equal => Ok(Value::Bool(left == right)),
            _ if op == BinaryOperator::NotEqual => Ok(Value::Bool(left != right)),
            _ if left.kind() != right.kind() => {
                Err(RuntimeError::TypeMismatch { left: left.kind(),
                                                 op,
                                                 right: right.kind(),
                                                 line }.into())
            },
            _ => Err(RuntimeError::UnknownBinaryOperator { left: left.kind(),
                                                           op,
                                                           right: right.kind(),
                                                           line }.into()),
        }
    }

    /// Evaluates a binary operation between two integers.
    ///
    /// Arithmetic is checked: overflow and division by zero raise dedicated
    /// errors instead of wrapping or panicking. Division truncates toward
    /// zero.
    fn eval_integer_binary(op: BinaryOperator, l: i64, r: i64, line: usize) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Self::checked(l.checked_add(r), line),
            BinaryOperator::Sub => Self::checked(l.checked_sub(r), line),
            BinaryOperator::Mul => Self::checked(l.checked_mul(r), line),
            BinaryOperator::Div => {
                if r == 0 {
                    return Err(RuntimeError::DivisionByZero { line }.into());
                }
                Self::checked(l.checked_div(r), line)
            },
            BinaryOperator::Less => Ok(Value::Bool(l < r)),
            BinaryOperator::Greater => Ok(Value::Bool(l > r)),
            BinaryOperator::Equal => Ok(Value::Bool(l == r)),
            BinaryOperator::NotEqual => Ok(Value::Bool(l != r)),
        }
    }

    /// Evaluates a binary operation between two strings.
    ///
    /// Only concatenation is defined on strings.
    fn eval_string_binary(op: BinaryOperator,
                          left: &str,
                          right: &str,
                          line: usize)
                          -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::from(format!("{left}{right}"))),
            _ => Err(RuntimeError::UnknownBinaryOperator { left: "STRING",
                                                           op,
                                                           right: "STRING",
                                                           line }.into()),
        }
    }

    /// Wraps a checked arithmetic result, turning `None` into an overflow
    /// error.
    fn checked(result: Option<i64>, line: usize) -> EvalResult<Value> {
        result.map(Value::Integer)
              .ok_or_else(|| RuntimeError::Overflow { line }.into())
    }
}
