use thiserror::Error;

use crate::span::Span;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("[line {}] Error: Unexpected character: {character}", .span.line)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// One character wide.
        span:      Span,
    },
    /// A string literal that reached the end of input before its closing
    /// quote.
    #[error("[line {}] Error: Unterminated string.", .span.line)]
    UnterminatedString {
        /// Everything after the opening quote.
        content: String,
        /// Zero-length position where scanning stopped.
        span:    Span,
    },
}

impl LexError {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::UnexpectedCharacter { span, .. } | Self::UnterminatedString { span, .. } => *span,
        }
    }
}
