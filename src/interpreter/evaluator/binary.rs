use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Dispatch is on the runtime kinds of the operands, not on any declared
    /// type:
    /// - two numbers use ordinary floating-point arithmetic, so division by
    ///   zero yields an infinity or NaN rather than an error;
    /// - `+` with a string on either side concatenates the text forms of
    ///   both operands;
    /// - anything else is a type mismatch.
    ///
    /// # Example
    /// ```
    /// use kava::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &"x".into(), &Value::Number(1.0), 1);
    /// assert_eq!(result.unwrap(), Value::from("x1"));
    ///
    /// let result = Context::eval_binary(BinaryOperator::Mul, &"x".into(), &Value::Number(2.0), 1);
    /// assert!(result.is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(match op {
                                                       Add => a + b,
                                                       Sub => a - b,
                                                       Mul => a * b,
                                                       Div => a / b,
                                                       Mod => a % b,
                                                   })),
            (Value::String(_), _) | (_, Value::String(_)) if op == Add => {
                Ok(Value::from(format!("{left}{right}")))
            },
            _ => Err(RuntimeError::TypeMismatch { op: op.to_string(),
                                                  left: left.kind(),
                                                  right: right.kind(),
                                                  line }),
        }
    }
}
