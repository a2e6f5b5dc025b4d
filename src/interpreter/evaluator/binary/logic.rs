use crate::{
    ast::{Expr, LogicalOperator},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        sink::Sink,
        value::core::Value,
    },
};

impl<S: Sink> Context<S> {
    /// Evaluates a short-circuiting logical operation.
    ///
    /// `and` returns the left value if it is falsy and `or` returns it if it
    /// is truthy; otherwise the right operand is evaluated and returned. The
    /// result is an operand value, not necessarily a boolean, and the right
    /// operand is never evaluated when the left one decides.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     Interpreter,
    ///     parser::core::ParseMode,
    ///     value::core::Value,
    /// };
    ///
    /// let mut interpreter = Interpreter::with_sink(ParseMode::Expression, Vec::<String>::new());
    ///
    /// assert_eq!(interpreter.evaluate("false and undefined").success,
    ///            Some(Value::Boolean(false)));
    /// assert_eq!(interpreter.evaluate("nil or \"default\"").success,
    ///            Some(Value::from("default")));
    /// ```
    pub fn eval_logical(&mut self,
                        op: LogicalOperator,
                        left: &Expr,
                        right: &Expr)
                        -> EvalResult<Value> {
        let left = self.eval(left)?;

        let decided = match op {
            LogicalOperator::And => !left.is_truthy(),
            LogicalOperator::Or => left.is_truthy(),
        };

        if decided { Ok(left) } else { self.eval(right) }
    }
}
