use std::fmt;

use thiserror::Error;

use crate::span::Span;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Read or assigned a variable no enclosing scope declares.
    #[error("[line {}] Error: Undefined variable '{name}'.", .span.line)]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// Location of the reference.
        span: Span,
    },
    /// An operator received operands of the wrong type.
    #[error("[line {}] Error: {expected}{}", .span.line, operator_detail(.expected, .operator))]
    TypeMismatch {
        /// The operator (or statement keyword) that rejected its operands.
        operator: String,
        /// What the operator requires.
        expected: Operands,
        /// Location of the operator.
        span:     Span,
    },
    /// A construct that parses but is not executed yet.
    #[error("[line {}] Error: Not implemented: {construct}", .span.line)]
    NotImplemented {
        /// Human-readable name of the construct, e.g. `while statement`.
        construct: &'static str,
        /// Location of the construct's keyword.
        span:      Span,
    },
}

/// What an operator expected from its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// `+` accepts two numbers or two strings.
    NumbersOrStrings,
    /// `-`, `*` and `/` accept numbers only.
    Arithmetic,
    /// Relational operators accept numbers only.
    Numbers,
    /// Unary `-` accepts a number only.
    Number,
    /// `if` conditions must be booleans.
    Boolean,
}

impl fmt::Display for Operands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NumbersOrStrings => "Operands must be two numbers or two strings.",
            Self::Arithmetic => "invalid operation",
            Self::Numbers => "Operands must be numbers.",
            Self::Number => "Operand must be a number.",
            Self::Boolean => "Condition must be a boolean.",
        };
        write!(f, "{message}")
    }
}

fn operator_detail(expected: &Operands, operator: &str) -> String {
    match expected {
        Operands::Arithmetic => format!(": {operator}"),
        _ => String::new(),
    }
}

impl RuntimeError {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UndefinedVariable { span, .. }
            | Self::TypeMismatch { span, .. }
            | Self::NotImplemented { span, .. } => *span,
        }
    }
}
