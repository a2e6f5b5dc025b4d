use crate::{
    ast::{Expr, Identifier, Node},
    error::{RuntimeError, runtime_error::Operands},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        sink::Sink,
        value::core::Value,
    },
    span::Span,
};

/// Builds the error raised by constructs that parse but are not executed.
#[must_use]
pub const fn not_implemented(construct: &'static str, span: Span) -> RuntimeError {
    RuntimeError::NotImplemented { construct, span }
}

impl<S: Sink> Context<S> {
    /// Evaluates a variable declaration.
    ///
    /// The initializer (or `nil` without one) is evaluated first and the
    /// name is then declared in the innermost scope, shadowing any outer
    /// declaration. `var a = a;` therefore reads the outer `a`.
    pub fn eval_var_decl(&mut self, name: &Identifier, initializer: Option<&Expr>) -> EvalResult<()> {
        let value = match initializer {
            Some(expr) => self.eval(expr)?,
            None => Value::Nil,
        };

        self.define_local(&name.name, value);
        Ok(())
    }

    /// Evaluates `print` by writing the value's canonical form to the sink.
    pub fn eval_print(&mut self, expr: &Expr) -> EvalResult<()> {
        let value = self.eval(expr)?;
        self.sink.write_line(&value.to_string());
        Ok(())
    }

    /// Evaluates an `if` statement.
    ///
    /// Unlike `!`, `and` and `or`, which accept any value, the condition must
    /// be a boolean.
    ///
    /// # Returns
    /// The value of the branch taken, or `None` when no branch runs.
    ///
    /// # Errors
    /// `TypeMismatch` if the condition is not a boolean.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{Interpreter, parser::core::ParseMode};
    ///
    /// let mut interpreter = Interpreter::with_sink(ParseMode::Statement, Vec::<String>::new());
    ///
    /// let outcome = interpreter.evaluate("if (42) print 1;");
    /// assert!(outcome.has_err());
    /// assert!(interpreter.sink().is_empty());
    /// ```
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Node,
                   else_branch: Option<&Node>,
                   span: Span)
                   -> EvalResult<Option<Value>> {
        let Value::Boolean(holds) = self.eval(condition)? else {
            return Err(RuntimeError::TypeMismatch { operator: "if".to_string(),
                                                    expected: Operands::Boolean,
                                                    span });
        };

        if holds {
            self.eval_node(then_branch)
        } else if let Some(otherwise) = else_branch {
            self.eval_node(otherwise)
        } else {
            Ok(None)
        }
    }
}
