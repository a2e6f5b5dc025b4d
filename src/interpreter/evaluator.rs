/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons, equality and the short-circuiting
/// logical operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the runtime context, the expression and node dispatchers, and the
/// result type shared by the evaluator.
pub mod core;

/// Statement evaluation.
///
/// Implements variable declarations, `print`, `if` and the constructs that
/// parse but are not executed yet.
pub mod statement;

/// Utility functions for evaluation.
///
/// Provides scope handling, variable lookup and block evaluation.
pub mod utils;
