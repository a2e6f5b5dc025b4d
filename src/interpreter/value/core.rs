use std::{fmt, rc::Rc};

use crate::interpreter::lexer::TokenKind;

/// Represents a runtime value in the interpreter.
///
/// Values are immutable. Equality is structural and never fails: values of
/// different variants are simply unequal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// An immutable string, shared between copies.
    String(Rc<str>),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators and `!`, and required by `if`
    /// conditions.
    Boolean(bool),
    /// The absence of a value.
    Nil,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl Value {
    /// Converts a literal token into the value it denotes.
    ///
    /// # Returns
    /// - `Some(Value)` for `NUMBER`, `STRING`, `true`, `false` and `nil`.
    /// - `None` for every other token, identifiers included.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::{lexer::TokenKind, value::core::Value};
    ///
    /// assert_eq!(Value::from_literal(&TokenKind::Nil), Some(Value::Nil));
    /// assert_eq!(Value::from_literal(&TokenKind::Identifier("x".into())), None);
    /// ```
    #[must_use]
    pub fn from_literal(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Number(number) => Some(Self::Number(number.value)),
            TokenKind::String(content) => Some(Self::from(content.as_str())),
            TokenKind::True => Some(Self::Boolean(true)),
            TokenKind::False => Some(Self::Boolean(false)),
            TokenKind::Nil => Some(Self::Nil),
            _ => None,
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// Only `false` and `nil` are falsy; `0` and `""` are truthy.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::value::core::Value;
    ///
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Returns the name of the value's type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Nil => "nil",
        }
    }
}

/// Formats a number in its canonical printed form.
///
/// Integral values print without a fractional part and negative zero prints
/// as `0`.
///
/// # Example
/// ```
/// use lox::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(42.0), "42");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
