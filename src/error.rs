/// Lexical errors.
///
/// Raised while turning raw text into tokens: characters the language does
/// not know and strings that never close.
pub mod lex_error;
/// Parsing errors.
///
/// Defines the syntax errors found while building the AST from tokens:
/// unexpected tokens, missing delimiters and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// variables, operand type mismatches and constructs the evaluator does not
/// execute yet.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

use crate::span::Span;

/// Exit code reported when the source could not be lexed or parsed.
pub const EXIT_STATIC_ERROR: i32 = 65;
/// Exit code reported when evaluation failed.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

/// Any error the pipeline can report.
///
/// The wrapped enums are distinct buckets: lexical and syntax errors are
/// collected exhaustively before evaluation starts, while the first runtime
/// error stops an evaluation pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns `true` for errors found before evaluation (lexical or syntax).
    #[must_use]
    pub const fn is_static(&self) -> bool {
        matches!(self, Self::Lex(_) | Self::Parse(_))
    }

    /// The process exit code a driver should use for this error.
    ///
    /// # Example
    /// ```
    /// use lox::{
    ///     error::{Error, LexError},
    ///     span::Span,
    /// };
    ///
    /// let error = Error::from(LexError::UnexpectedCharacter { character: '$',
    ///                                                         span:      Span::new(1, 0, 1), });
    ///
    /// assert_eq!(error.exit_code(), 65);
    /// ```
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.is_static() {
            EXIT_STATIC_ERROR
        } else {
            EXIT_RUNTIME_ERROR
        }
    }

    /// Where the error happened.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span(),
            Self::Parse(e) => e.span(),
            Self::Runtime(e) => e.span(),
        }
    }
}

/// Picks the exit code for a whole pass.
///
/// Any lexical or syntax error wins over runtime errors; no errors means
/// success.
#[must_use]
pub fn exit_code(errors: &[Error]) -> i32 {
    if errors.is_empty() {
        0
    } else if errors.iter().any(Error::is_static) {
        EXIT_STATIC_ERROR
    } else {
        EXIT_RUNTIME_ERROR
    }
}
