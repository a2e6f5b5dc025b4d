use thiserror::Error;

use crate::span::Span;

/// Represents all syntax errors the parser can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot start or continue the current construct.
    #[error("[line {}] Error: Unexpected token: {token}", .span.line)]
    UnexpectedToken {
        /// The token's source text.
        token: String,
        /// Location of the token.
        span:  Span,
    },
    /// A required delimiter was not where the grammar expects it.
    #[error("[line {}] Error: Missing token: expected '{expected}' got '{actual}'", .span.line)]
    MissingToken {
        /// Lexeme of the token the grammar requires.
        expected: String,
        /// Source text of the token found instead.
        actual:   String,
        /// Location of the token found instead.
        span:     Span,
    },
    /// Ran out of tokens in the middle of a construct.
    #[error("[line {}] Error: Unexpected EOF", .span.line)]
    UnexpectedEof {
        /// Zero-length position at the end of input.
        span: Span,
    },
}

impl ParseError {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::MissingToken { span, .. }
            | Self::UnexpectedEof { span } => *span,
        }
    }
}
