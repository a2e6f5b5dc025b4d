use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, TokenKind},
        sink::Sink,
        value::core::Value,
    },
};

impl<S: Sink> Context<S> {
    /// Evaluates a terminal expression.
    ///
    /// Literal tokens map directly to values; identifiers are looked up in
    /// the scope stack.
    ///
    /// # Errors
    /// `UndefinedVariable` if an identifier is not declared in any scope.
    pub fn eval_terminal(&self, token: &Token) -> EvalResult<Value> {
        if let Some(value) = Value::from_literal(&token.kind) {
            return Ok(value);
        }

        match &token.kind {
            TokenKind::Identifier(name) => self.eval_variable(name, token),
            kind => Err(RuntimeError::NotImplemented { construct: kind.name(),
                                                       span:      token.span, }),
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the variable is not found, an `UndefinedVariable` error located at
    /// `token` is returned.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Context,
    ///     lexer::{TokenKind, scan},
    ///     value::core::Value,
    /// };
    ///
    /// let mut context = Context::with_sink(Vec::<String>::new());
    /// context.define_local("x", Value::Number(10.0));
    ///
    /// let tokens = scan("x y").success;
    /// assert_eq!(context.eval_variable("x", &tokens[0]), Ok(Value::Number(10.0)));
    /// assert!(context.eval_variable("y", &tokens[1]).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, token: &Token) -> EvalResult<Value> {
        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_owned(),
                                                             span: token.span, })
    }

    /// Evaluates a sequence of nodes as a block.
    ///
    /// A new local scope is pushed before execution and removed afterward,
    /// whether or not a node fails. Each node is evaluated in order.
    ///
    /// # Returns
    /// The value of the last node, or `None` if it yields nothing.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Context,
    ///     parser::core::{ParseMode, Parser},
    /// };
    ///
    /// let nodes = Parser::new(ParseMode::Statement).parse("var a = 1; a = a + 1;").success;
    ///
    /// let mut context = Context::with_sink(Vec::<String>::new());
    /// let value = context.eval_block(&nodes).unwrap();
    ///
    /// assert_eq!(value.unwrap().to_string(), "2");
    /// assert_eq!(context.scope_stack.len(), 1);
    /// assert!(context.get_variable("a").is_none());
    /// ```
    pub fn eval_block(&mut self, nodes: &[Node]) -> EvalResult<Option<Value>> {
        self.push_scope();
        let result = self.eval_sequence(nodes);
        self.pop_scope();

        result
    }

    /// Evaluates nodes in order in the current scope.
    ///
    /// # Returns
    /// The value of the last node, or `None` if it yields nothing.
    pub fn eval_sequence(&mut self, nodes: &[Node]) -> EvalResult<Option<Value>> {
        let mut last = None;

        for node in nodes {
            last = self.eval_node(node)?;
        }

        Ok(last)
    }

    /// Adds a new, empty local scope.
    ///
    /// This is called when entering a block.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        debug!(depth = self.scope_stack.len(), "pushed scope");
    }

    /// Removes the innermost local scope.
    ///
    /// The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            self.scope_stack.pop();
        }
        debug!(depth = self.scope_stack.len(), "popped scope");
    }

    /// Retrieves a variable from the current scope stack.
    ///
    /// Lookup begins at the innermost scope and proceeds outward toward the
    /// global scope. Returns `None` if the variable is not defined in any
    /// active scope.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Defines a variable in the current (innermost) scope.
    ///
    /// Redeclaring a name in the same scope overwrites it; declaring a name
    /// that exists in an outer scope shadows it.
    pub fn define_local(&mut self, name: &str, value: Value) {
        if let Some(scope) = self.scope_stack.last_mut() {
            scope.insert(name.to_string(), value);
        } else {
            self.scope_stack.push(HashMap::from([(name.to_string(), value)]));
        }
    }

    /// Assigns a value to the nearest scope that declares `name`.
    ///
    /// The assignment searches from the innermost scope outward.
    ///
    /// # Returns
    /// `Some(())` if a declaring scope was found, `None` otherwise. Nothing is
    /// written in that case.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut context = Context::with_sink(Vec::<String>::new());
    /// context.define_local("x", Value::Number(1.0));
    /// context.push_scope();
    ///
    /// assert!(context.assign_nearest("x", Value::Number(2.0)).is_some());
    /// assert!(context.assign_nearest("y", Value::Nil).is_none());
    ///
    /// context.pop_scope();
    /// assert_eq!(context.get_variable("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn assign_nearest(&mut self, name: &str, value: Value) -> Option<()> {
        let slot = self.scope_stack
                       .iter_mut()
                       .rev()
                       .find_map(|scope| scope.get_mut(name))?;
        *slot = value;
        Some(())
    }
}
