use crate::{
    ast::BinaryOperator,
    error::{RuntimeError, runtime_error::Operands},
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    span::Span,
};

/// Evaluates `+`.
///
/// Two numbers are added and two strings concatenated. Mixing the two, or
/// any other operand, is a type mismatch.
///
/// # Example
/// ```
/// use lox::{
///     interpreter::{evaluator::binary::arithmetic::eval_add, value::core::Value},
///     span::Span,
/// };
///
/// let span = Span::new(1, 4, 1);
///
/// let joined = eval_add(&Value::from("foo"), &Value::from("bar"), span).unwrap();
/// assert_eq!(joined, Value::from("foobar"));
///
/// assert!(eval_add(&Value::from("1"), &Value::Number(1.0), span).is_err());
/// ```
pub fn eval_add(left: &Value, right: &Value, span: Span) -> EvalResult<Value> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(a), Value::String(b)) => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(RuntimeError::TypeMismatch { operator: BinaryOperator::Add.to_string(),
                                              expected: Operands::NumbersOrStrings,
                                              span }),
    }
}

/// Evaluates `-`, `*` or `/` on two numbers.
///
/// Division follows IEEE 754: dividing by zero yields an infinity (or NaN
/// for `0 / 0`) instead of an error.
///
/// # Errors
/// `TypeMismatch` naming the operator if either operand is not a number.
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       span: Span)
                       -> EvalResult<Value> {
    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(RuntimeError::TypeMismatch { operator: op.to_string(),
                                                expected: Operands::Arithmetic,
                                                span });
    };

    let result = match op {
        BinaryOperator::Sub => a - b,
        BinaryOperator::Mul => a * b,
        _ => a / b,
    };

    Ok(Value::Number(result))
}
