use std::{collections::HashMap, io};

use tracing::trace;

use crate::{
    ast::{Expr, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::core::eval_binary, statement::not_implemented},
        sink::Sink,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the stack of lexical scopes and
/// the sink that `print` writes to.
///
/// ## Usage
///
/// `Context` is created once and reused for every node of a session. The
/// global scope at the bottom of the stack lives as long as the context;
/// blocks push and pop scopes above it.
pub struct Context<S = io::Stdout> {
    /// Scopes from outermost (global) to innermost.
    pub scope_stack: Vec<HashMap<String, Value>>,
    pub(crate) sink: S,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::with_sink(io::stdout())
    }
}

impl<S: Sink> Context<S> {
    /// Creates a context with only the global scope, printing to `sink`.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self { scope_stack: vec![HashMap::new()],
               sink }
    }

    /// The sink `print` writes to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the context and returns its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: terminals,
    /// groups, unary, binary and logical operations, and assignments.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{
    ///     evaluator::core::Context,
    ///     parser::core::{ParseMode, Parser},
    ///     value::core::Value,
    /// };
    ///
    /// let nodes = Parser::new(ParseMode::Expression).parse("1 + 2 * 3").success;
    /// let lox::ast::Node::Expression(expr) = &nodes[0] else { panic!() };
    ///
    /// let mut context = Context::with_sink(Vec::<String>::new());
    /// assert_eq!(context.eval(expr), Ok(Value::Number(7.0)));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Terminal(token) => self.eval_terminal(token),
            Expr::Group { inner, .. } => self.eval(inner),
            Expr::Unary { op, expr, span } => self.eval_unary_op(*op, expr, *span),
            Expr::Binary { left,
                           op,
                           right,
                           span, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                eval_binary(*op, &left, &right, *span)
            },
            Expr::Logical { left, op, right, .. } => self.eval_logical(*op, left, right),
            Expr::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.assign_nearest(&name.name, value.clone())
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.name.clone(),
                                                                     span: name.span, })?;
                Ok(value)
            },
        }
    }

    /// Evaluates a single top-level node or statement.
    ///
    /// Expressions and expression statements yield their value, blocks the
    /// value of their last node and `if` the value of the branch taken.
    /// Declarations and `print` yield nothing.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for nodes that
    /// do not yield one.
    pub fn eval_node(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        trace!(line = node.span().line, %node, "evaluating node");

        match node {
            Node::Expression(expr) | Node::ExprStmt { expr, .. } => self.eval(expr).map(Some),
            Node::PrintStmt { expr, .. } => {
                self.eval_print(expr)?;
                Ok(None)
            },
            Node::VarDecl { name,
                            initializer, .. } => {
                self.eval_var_decl(name, initializer.as_ref())?;
                Ok(None)
            },
            Node::Block { nodes, .. } => self.eval_block(nodes),
            Node::IfStmt { condition,
                           then_branch,
                           else_branch,
                           span, } => {
                self.eval_if(condition, then_branch, else_branch.as_deref(), *span)
            },
            Node::WhileStmt { span, .. } => Err(not_implemented("while statement", *span)),
            Node::ForStmt { span, .. } => Err(not_implemented("for statement", *span)),
            Node::ReturnStmt { span, .. } => Err(not_implemented("return statement", *span)),
            Node::ClassDecl(class) => Err(not_implemented("class declaration", class.span)),
            Node::FunDecl(function) => {
                Err(not_implemented("function declaration", function.span))
            },
        }
    }
}
