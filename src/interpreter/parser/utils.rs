use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, cursor::TokenCursor},
    },
};

/// Consumes a required token.
///
/// The next token must have exactly the kind `expected`; this is only used
/// for punctuation, whose kinds carry no payload.
///
/// # Parameters
/// - `tokens`: Cursor positioned at the required token.
/// - `expected`: The token kind the grammar requires here.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// - `MissingToken` if another token is found. It is left in place.
/// - `UnexpectedEof` if the input ends.
pub(in crate::interpreter::parser) fn expect<'a>(tokens: &mut TokenCursor<'a>,
                                                 expected: &TokenKind)
                                                 -> ParseResult<&'a Token> {
    if let Some(token) = tokens.next_if(|kind| kind == expected) {
        return Ok(token);
    }

    match tokens.peek() {
        Some(actual) => Err(ParseError::MissingToken { expected: expected.lexeme(),
                                                       actual:   actual.kind.lexeme(),
                                                       span:     actual.span, }),
        None => Err(ParseError::UnexpectedEof { span: tokens.eof() }),
    }
}

/// Parses a plain identifier and returns it with its span.
///
/// The next token must be `TokenKind::Identifier`. Keywords are never
/// identifiers, so `var class` fails here.
///
/// # Errors
/// - `UnexpectedToken` if the next token is not an identifier. The token is
///   consumed.
/// - `UnexpectedEof` if the input ends.
pub(in crate::interpreter::parser) fn parse_identifier(tokens: &mut TokenCursor<'_>)
                                                       -> ParseResult<Identifier> {
    match tokens.next() {
        Some(Token { kind: TokenKind::Identifier(name),
                     span, }) => Ok(Identifier { name: name.clone(),
                                                 span: *span, }),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.kind.lexeme(),
                                                         span:  token.span, }),
        None => Err(ParseError::UnexpectedEof { span: tokens.eof() }),
    }
}

/// Parses a parenthesized, comma-separated parameter list.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar: `params := "(" (IDENTIFIER ("," IDENTIFIER)*)? ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - the opening or closing parenthesis is missing,
/// - a parameter is not an identifier,
/// - the stream ends before the closing parenthesis.
pub(in crate::interpreter::parser) fn parse_parameters(tokens: &mut TokenCursor<'_>)
                                                       -> ParseResult<Vec<Identifier>> {
    expect(tokens, &TokenKind::LeftParen)?;

    let mut params = Vec::new();
    if tokens.next_if(|kind| *kind == TokenKind::RightParen).is_some() {
        return Ok(params);
    }

    loop {
        params.push(parse_identifier(tokens)?);
        if tokens.next_if(|kind| *kind == TokenKind::Comma).is_none() {
            break;
        }
    }
    expect(tokens, &TokenKind::RightParen)?;

    Ok(params)
}
