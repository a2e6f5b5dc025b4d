/// Core parsing logic.
///
/// Defines the [`core::Parser`] entry point, the parse modes and the
/// top-level expression and assignment rules.
pub mod core;

/// Token cursor.
///
/// One-token lookahead over a scanned token slice.
pub mod cursor;

/// Binary and logical operator parsing.
///
/// Implements the precedence tiers from `or` down to multiplication.
pub mod binary;

/// Unary operator and primary expression parsing.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited declaration lists for blocks and function bodies.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for required delimiters, identifiers and parameter lists.
pub mod utils;

/// Statement and declaration parsing.
///
/// Implements `var`, `fun`, `class`, `print`, `if`, `while`, `for`, `return`
/// and expression statements.
pub mod statement;
