use crate::{
    ast::{ClassDecl, Expr, FunctionDecl, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block_body,
            core::{ParseResult, parse_expression},
            cursor::TokenCursor,
            utils::{expect, parse_identifier, parse_parameters},
        },
    },
};

/// Parses a single declaration.
///
/// A declaration may be one of:
/// - a class declaration (`class`),
/// - a function declaration (`fun`),
/// - a variable declaration (`var`),
/// - any statement.
///
/// The leading keyword decides which one is parsed; nothing else is
/// attempted afterwards.
///
/// Grammar: `declaration := classDecl | funDecl | varDecl | statement`
///
/// # Parameters
/// - `tokens`: Token cursor positioned at the first token of the declaration.
///
/// # Returns
/// A parsed [`Node`].
pub fn parse_declaration(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    if let Some(keyword) = tokens.next_if(|kind| *kind == TokenKind::Class) {
        return parse_class(tokens, keyword);
    }
    if let Some(keyword) = tokens.next_if(|kind| *kind == TokenKind::Fun) {
        return Ok(Node::FunDecl(parse_function(tokens, keyword)?));
    }
    if let Some(keyword) = tokens.next_if(|kind| *kind == TokenKind::Var) {
        return parse_variable_declaration(tokens, keyword);
    }

    parse_statement(tokens)
}

/// Parses a statement.
///
/// Grammar:
/// ```text
///     statement := block | ifStmt | whileStmt | forStmt
///                | returnStmt | printStmt | exprStmt
/// ```
pub fn parse_statement(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let Some(token) = tokens.peek() else {
        return parse_expression_statement(tokens);
    };

    let parse: fn(&mut TokenCursor<'_>, &Token) -> ParseResult<Node> = match token.kind {
        TokenKind::LeftBrace => parse_block,
        TokenKind::If => parse_if,
        TokenKind::While => parse_while,
        TokenKind::For => parse_for,
        TokenKind::Return => parse_return,
        TokenKind::Print => parse_print,
        _ => return parse_expression_statement(tokens),
    };

    tokens.next();
    parse(tokens, token)
}

/// Parses a variable declaration.
///
/// A declaration has the form `var <identifier> (= <expression>)? ;`.
///
/// # Parameters
/// - `tokens`: Token cursor positioned after `var`.
/// - `keyword`: The `var` token.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the name is not an identifier,
/// - the initializer is malformed,
/// - the `;` is missing.
fn parse_variable_declaration(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let name = parse_identifier(tokens)?;

    let initializer = if tokens.next_if(|kind| *kind == TokenKind::Equal).is_some() {
        Some(parse_expression(tokens)?)
    } else {
        None
    };
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Node::VarDecl { name,
                       initializer,
                       span: keyword.span })
}

/// Parses a function declaration after the `fun` keyword, or a method inside
/// a class body.
///
/// Grammar: `function := IDENTIFIER "(" parameters? ")" block`
fn parse_function(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<FunctionDecl> {
    let name = parse_identifier(tokens)?;
    let params = parse_parameters(tokens)?;
    expect(tokens, &TokenKind::LeftBrace)?;
    let body = parse_block_body(tokens)?;

    Ok(FunctionDecl { name,
                      params,
                      body,
                      span: keyword.span })
}

/// Parses a class declaration.
///
/// Grammar: `classDecl := "class" IDENTIFIER ("<" IDENTIFIER)? "{" function* "}"`
///
/// Methods are written without `fun`; each method's span is its name.
fn parse_class(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let name = parse_identifier(tokens)?;

    let superclass = if tokens.next_if(|kind| *kind == TokenKind::Less).is_some() {
        Some(parse_identifier(tokens)?)
    } else {
        None
    };
    expect(tokens, &TokenKind::LeftBrace)?;

    let mut methods = Vec::new();
    while tokens.next_if(|kind| *kind == TokenKind::RightBrace).is_none() {
        let Some(start) = tokens.peek() else {
            return Err(ParseError::UnexpectedEof { span: tokens.eof() });
        };
        methods.push(parse_function(tokens, start)?);
    }

    Ok(Node::ClassDecl(ClassDecl { name,
                                   superclass,
                                   methods,
                                   span: keyword.span }))
}

/// Parses a block statement after its opening brace.
fn parse_block(tokens: &mut TokenCursor<'_>, brace: &Token) -> ParseResult<Node> {
    let nodes = parse_block_body(tokens)?;

    Ok(Node::Block { nodes,
                     span: brace.span })
}

/// Parses an `if` statement with an optional `else`.
///
/// Syntax:
/// ```text
///     if <condition> <statement>
///     else <statement>
/// ```
/// The condition is an ordinary expression, so the customary parentheses are
/// parsed as a group. A dangling `else` binds to the nearest `if`.
fn parse_if(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let condition = parse_expression(tokens)?;
    let then_branch = parse_statement(tokens)?;

    let else_branch = if tokens.next_if(|kind| *kind == TokenKind::Else).is_some() {
        Some(Box::new(parse_statement(tokens)?))
    } else {
        None
    };

    Ok(Node::IfStmt { condition,
                      then_branch: Box::new(then_branch),
                      else_branch,
                      span: keyword.span })
}

/// Parses a `while` statement.
///
/// Grammar: `whileStmt := "while" expression statement`
fn parse_while(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let condition = parse_expression(tokens)?;
    let body = parse_statement(tokens)?;

    Ok(Node::WhileStmt { condition,
                         body: Box::new(body),
                         span: keyword.span })
}

/// Parses a `for` statement.
///
/// Grammar:
/// ```text
///     forStmt := "for" "(" (varDecl | exprStmt | ";")
///                expression? ";" expression? ")" statement
/// ```
fn parse_for(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    expect(tokens, &TokenKind::LeftParen)?;

    let initializer = if tokens.next_if(|kind| *kind == TokenKind::Semicolon).is_some() {
        None
    } else if let Some(var) = tokens.next_if(|kind| *kind == TokenKind::Var) {
        Some(Box::new(parse_variable_declaration(tokens, var)?))
    } else {
        Some(Box::new(parse_expression_statement(tokens)?))
    };

    let condition = parse_optional_expression(tokens, &TokenKind::Semicolon)?;
    expect(tokens, &TokenKind::Semicolon)?;
    let increment = parse_optional_expression(tokens, &TokenKind::RightParen)?;
    expect(tokens, &TokenKind::RightParen)?;

    let body = parse_statement(tokens)?;

    Ok(Node::ForStmt { initializer,
                       condition,
                       increment,
                       body: Box::new(body),
                       span: keyword.span })
}

/// Parses a `return` statement with an optional value.
fn parse_return(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let value = parse_optional_expression(tokens, &TokenKind::Semicolon)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Node::ReturnStmt { value,
                          span: keyword.span })
}

/// Parses `print <expression> ;`.
fn parse_print(tokens: &mut TokenCursor<'_>, keyword: &Token) -> ParseResult<Node> {
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    Ok(Node::PrintStmt { expr,
                         span: keyword.span })
}

/// Parses `<expression> ;`.
fn parse_expression_statement(tokens: &mut TokenCursor<'_>) -> ParseResult<Node> {
    let expr = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Semicolon)?;

    let span = expr.span();
    Ok(Node::ExprStmt { expr, span })
}

/// Parses an expression unless the next token is `terminator`.
///
/// The terminator itself is left for the caller.
fn parse_optional_expression(tokens: &mut TokenCursor<'_>,
                             terminator: &TokenKind)
                             -> ParseResult<Option<Expr>> {
    if tokens.check(|kind| kind == terminator) {
        Ok(None)
    } else {
        parse_expression(tokens).map(Some)
    }
}
