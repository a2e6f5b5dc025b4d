use crate::{
    ast::BinaryOperator,
    error::{RuntimeError, runtime_error::Operands},
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    span::Span,
};

/// Evaluates `==` or `!=`.
///
/// Values are compared structurally. Values of different types are unequal,
/// so this never fails: `nil == nil` is `true`, `1 == "1"` is `false`.
#[must_use]
pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> Value {
    let is_equal = left == right;

    Value::Boolean(if op == BinaryOperator::NotEqual { !is_equal } else { is_equal })
}

/// Evaluates a relational comparison of the form `Value <Operator> Value`.
///
/// Both operands must be numbers.
///
/// # Parameters
/// - `op`: One of `<`, `<=`, `>`, `>=`.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `span`: Location of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result.
///
/// # Example
/// ```
/// use lox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_relational, value::core::Value},
///     span::Span,
/// };
///
/// let span = Span::new(1, 2, 1);
/// let result = eval_relational(BinaryOperator::Less, &Value::Number(3.0), &Value::Number(5.0), span);
///
/// assert_eq!(result.unwrap(), Value::Boolean(true));
/// ```
pub fn eval_relational(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       span: Span)
                       -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(RuntimeError::TypeMismatch { operator: op.to_string(),
                                                expected: Operands::Numbers,
                                                span });
    };

    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        _ => a >= b,
    };

    Ok(Value::Boolean(result))
}
