use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{
                arithmetic::{eval_add, eval_arithmetic},
                comparison::{eval_equality, eval_relational},
            },
            core::EvalResult,
        },
        value::core::Value,
    },
    span::Span,
};

/// Evaluates a binary operation between two values.
///
/// This function routes the operation to specialized handlers depending on
/// the operator. `+` accepts numbers or strings, the other arithmetic
/// operators and the relational operators numbers only. Equality never fails.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `span`: Location of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the evaluated result.
///
/// # Example
/// ```
/// use lox::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
///     span::Span,
/// };
///
/// let span = Span::new(1, 2, 1);
///
/// let result = eval_binary(BinaryOperator::Add, &Value::Number(3.0), &Value::Number(4.0), span);
/// assert_eq!(result.unwrap(), Value::Number(7.0));
///
/// let result = eval_binary(BinaryOperator::Equal, &Value::Nil, &Value::from("nil"), span);
/// assert_eq!(result.unwrap(), Value::Boolean(false));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   span: Span)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
    };

    match op {
        Add => eval_add(left, right, span),
        Sub | Mul | Div => eval_arithmetic(op, left, right, span),
        Less | LessEqual | Greater | GreaterEqual => eval_relational(op, left, right, span),
        Equal | NotEqual => Ok(eval_equality(op, left, right)),
    }
}
