use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            utils::expect,
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token cursor with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
pub(crate) fn parse_unary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let Some(token) = tokens.next_if(|kind| matches!(kind, TokenKind::Minus | TokenKind::Bang))
    else {
        return parse_primary(tokens);
    };

    let op = if token.kind == TokenKind::Minus {
        UnaryOperator::Negate
    } else {
        UnaryOperator::Not
    };
    let expr = parse_unary(tokens)?;

    Ok(Expr::Unary { op,
                     expr: Box::new(expr),
                     span: token.span })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// literals, identifiers and parenthesized expressions.
///
/// Grammar:
/// ```text
///     primary := "true" | "false" | "nil" | NUMBER | STRING | IDENTIFIER
///              | "(" expression ")"
/// ```
/// # Errors
/// - `UnexpectedToken` for any other token. The token is consumed, so the
///   caller always makes progress.
/// - `UnexpectedEof` if the input ends.
/// - `MissingToken` if a group is not closed.
pub(crate) fn parse_primary(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let token = tokens.next()
                      .ok_or_else(|| ParseError::UnexpectedEof { span: tokens.eof() })?;

    match &token.kind {
        TokenKind::Number(_)
        | TokenKind::String(_)
        | TokenKind::Identifier(_)
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Nil => Ok(Expr::Terminal(token.clone())),
        TokenKind::LeftParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RightParen)?;

            Ok(Expr::Group { inner: Box::new(inner),
                             span:  token.span, })
        },
        kind => Err(ParseError::UnexpectedToken { token: kind.lexeme(),
                                                  span:  token.span, }),
    }
}
