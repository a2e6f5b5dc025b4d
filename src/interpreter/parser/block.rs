use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, statement::parse_declaration},
    },
};

/// Parses the declarations of a block delimited by braces.
///
/// A block holds one or more declarations. Parsing continues until the
/// closing `}` is consumed. `{ }` is rejected: the `}` is reported as an
/// unexpected token where the first declaration should start.
///
/// Grammar: `block := "{" declaration+ "}"`
///
/// # Parameters
/// - `tokens`: Token cursor positioned after the opening brace.
///
/// # Returns
/// The declarations inside the block.
///
/// # Errors
/// - Propagates any error from the inner declarations.
/// - `UnexpectedEof` if the input ends before the closing brace.
pub fn parse_block_body(tokens: &mut TokenCursor<'_>) -> ParseResult<Vec<Node>> {
    let mut nodes = vec![parse_declaration(tokens)?];

    while tokens.next_if(|kind| *kind == TokenKind::RightBrace).is_none() {
        if tokens.is_at_end() {
            return Err(ParseError::UnexpectedEof { span: tokens.eof() });
        }
        nodes.push(parse_declaration(tokens)?);
    }

    Ok(nodes)
}
