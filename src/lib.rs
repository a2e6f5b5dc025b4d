//! # lox
//!
//! lox is a tree-walking interpreter for a small, dynamically typed scripting
//! language with C-like syntax, written in Rust.
//! It scans, parses, and evaluates programs made of literals, arithmetic,
//! comparison and logical operators, variables, blocks and conditionals,
//! reporting every lexical and syntax error of a program in one pass.
//!
//! ```
//! use lox::interpreter::{Interpreter, parser::core::ParseMode};
//!
//! let mut interpreter = Interpreter::with_sink(ParseMode::Statement, Vec::<String>::new());
//! let outcome = interpreter.evaluate("var greeting = \"hello\"; print greeting + \" world\";");
//!
//! assert!(!outcome.has_err());
//! assert_eq!(interpreter.sink(), &vec!["hello world".to_string()]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Node` enums and related types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression, statement and declaration types for all language
///   constructs.
/// - Attaches source spans to AST nodes for error reporting.
/// - Renders nodes in parenthesized prefix form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating code, each carrying the span it was found at, and maps them
/// to process exit codes.
///
/// # Responsibilities
/// - Defines one error enum per stage and a wrapper over all of them.
/// - Renders errors as `[line N] Error: message`.
/// - Classifies errors as static (65) or runtime (70).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and exposes the [`interpreter::Interpreter`] entry point.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Multi-error stage results.
pub mod outcome;
/// Source locations.
pub mod span;
