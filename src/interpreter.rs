use std::io;

use tracing::debug;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        parser::core::{ParseMode, Parser},
        sink::Sink,
        value::core::Value,
    },
    outcome::Outcome,
};

/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// manages variable scopes, and produces results. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, blocks and conditionals.
/// - Reports runtime errors such as undefined variables or operand type
///   mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, operators, delimiters, and keywords. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   location.
/// - Handles numeric and string literals, identifiers, keywords and comments.
/// - Reports every lexical error of the input in one pass.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements,
///   declarations).
/// - Validates grammar, reporting errors with location info.
/// - Recovers at top-level declaration boundaries to report several errors.
pub mod parser;
/// Output destinations for `print`.
pub mod sink;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, strings, booleans and `nil`, together with truthiness and the
/// canonical printed form.
pub mod value;

/// Runs source text through the whole pipeline.
///
/// An interpreter keeps one environment for its whole life, so variables
/// declared by one call to [`Interpreter::evaluate`] are visible to the next.
/// Create a new instance to start from a clean state.
pub struct Interpreter<S = io::Stdout> {
    parser:  Parser,
    context: Context<S>,
}

impl Interpreter {
    /// Creates an interpreter that prints to standard output.
    #[must_use]
    pub fn new(mode: ParseMode) -> Self {
        Self::with_sink(mode, io::stdout())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(ParseMode::default())
    }
}

impl<S: Sink> Interpreter<S> {
    /// Creates an interpreter that prints to `sink`.
    #[must_use]
    pub fn with_sink(mode: ParseMode, sink: S) -> Self {
        Self { parser:  Parser::new(mode),
               context: Context::with_sink(sink), }
    }

    /// Lexes, parses and evaluates `source`.
    ///
    /// Lexical and syntax errors are returned all at once and nothing is
    /// evaluated. Otherwise each top-level node is evaluated in order; the
    /// first runtime error stops the pass, keeping whatever the earlier nodes
    /// changed.
    ///
    /// # Returns
    /// The value of the last node evaluated, `None` if that node yields
    /// nothing, together with any errors.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{Interpreter, parser::core::ParseMode, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::with_sink(ParseMode::Statement, Vec::<String>::new());
    ///
    /// let outcome = interpreter.evaluate("var x = 10; { var x = 20; print x; } x;");
    /// assert_eq!(outcome.success, Some(Value::Number(10.0)));
    /// assert_eq!(interpreter.sink(), &vec!["20".to_string()]);
    ///
    /// // State survives across calls.
    /// let outcome = interpreter.evaluate("x = x + 1;");
    /// assert_eq!(outcome.success, Some(Value::Number(11.0)));
    /// ```
    pub fn evaluate(&mut self, source: &str) -> Outcome<Option<Value>, Error> {
        let parsed = self.parser.parse(source);
        if parsed.has_err() {
            return Outcome::new(None, parsed.errors);
        }

        self.execute(&parsed.success)
    }

    /// Evaluates already parsed nodes in order.
    pub fn execute(&mut self, nodes: &[Node]) -> Outcome<Option<Value>, Error> {
        let mut result = None;

        for node in nodes {
            match self.context.eval_node(node) {
                Ok(value) => result = value,
                Err(error) => {
                    debug!(%error, "evaluation halted");
                    return Outcome::new(result, vec![error.into()]);
                },
            }
        }

        Outcome::new(result, Vec::new())
    }

    /// The parse mode chosen at construction.
    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.parser.mode()
    }

    /// The evaluation context, for inspecting variables.
    #[must_use]
    pub const fn context(&self) -> &Context<S> {
        &self.context
    }

    /// The sink `print` writes to.
    #[must_use]
    pub const fn sink(&self) -> &S {
        self.context.sink()
    }

    /// Consumes the interpreter and returns its sink.
    pub fn into_sink(self) -> S {
        self.context.into_sink()
    }
}
