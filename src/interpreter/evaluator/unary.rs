use crate::{
    ast::{Expr, UnaryOperator},
    error::{RuntimeError, runtime_error::Operands},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        sink::Sink,
        value::core::Value,
    },
    span::Span,
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation. Any other operand is a type mismatch.
/// - `Not`: negated truthiness, defined for every value.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `span`: Location of the operator, for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Example
/// ```
/// use lox::{
///     ast::UnaryOperator,
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
///     span::Span,
/// };
///
/// let span = Span::new(1, 0, 1);
///
/// // Negation
/// let v = eval_unary(UnaryOperator::Negate, &Value::Number(5.0), span).unwrap();
/// assert_eq!(v, Value::Number(-5.0));
///
/// // Not
/// let v = eval_unary(UnaryOperator::Not, &Value::Nil, span).unwrap();
/// assert_eq!(v, Value::Boolean(true));
///
/// // Negating a string fails
/// assert!(eval_unary(UnaryOperator::Negate, &Value::from("a"), span).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, span: Span) -> EvalResult<Value> {
    match op {
        UnaryOperator::Negate => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            _ => Err(RuntimeError::TypeMismatch { operator: op.to_string(),
                                                  expected: Operands::Number,
                                                  span }),
        },
        UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
    }
}

impl<S: Sink> Context<S> {
    /// Evaluates a unary operator applied to a subexpression.
    ///
    /// The operand is evaluated first, then `eval_unary` applies the
    /// operator.
    pub fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr, span: Span) -> EvalResult<Value> {
        let value = self.eval(expr)?;
        eval_unary(op, &value, span)
    }
}
