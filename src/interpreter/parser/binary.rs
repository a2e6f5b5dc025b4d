use crate::{
    ast::{BinaryOperator, Expr, LogicalOperator},
    interpreter::{
        lexer::TokenKind,
        parser::{core::ParseResult, cursor::TokenCursor, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `or`. Precedence is lower than `and`.
///
/// Grammar: `logic_or := logic_and ("or" logic_and)*`
///
/// # Parameters
/// - `tokens`: Token cursor with lookahead.
///
/// # Returns
/// An expression tree using `Expr::Logical` with `LogicalOperator::Or`.
pub fn parse_logic_or(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_logic_and(tokens)?;

    while let Some(token) = tokens.next_if(|kind| *kind == TokenKind::Or) {
        let right = parse_logic_and(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::Or,
                               right: Box::new(right),
                               span:  token.span, };
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Grammar: `logic_and := equality ("and" equality)*`
pub fn parse_logic_and(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let mut left = parse_equality(tokens)?;

    while let Some(token) = tokens.next_if(|kind| *kind == TokenKind::And) {
        let right = parse_equality(tokens)?;
        left = Expr::Logical { left:  Box::new(left),
                               op:    LogicalOperator::And,
                               right: Box::new(right),
                               span:  token.span, };
    }

    Ok(left)
}

/// Parses equality operators.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_comparison, is_equality_op)
}

/// Parses relational operators.
///
/// Grammar: `comparison := term (("<" | "<=" | ">" | ">=") term)*`
pub fn parse_comparison(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_term, is_relational_op)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `term := factor (("+" | "-") factor)*`
pub fn parse_term(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_factor, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_binary_tier(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Parses one left-associative precedence tier.
///
/// Operands are parsed with `operand`; the loop continues while the next
/// token maps to an operator accepted by `accepts`.
fn parse_binary_tier(tokens: &mut TokenCursor<'_>,
                     operand: fn(&mut TokenCursor<'_>) -> ParseResult<Expr>,
                     accepts: fn(BinaryOperator) -> bool)
                     -> ParseResult<Expr> {
    let mut left = operand(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&token.kind)
           && accepts(op)
        {
            tokens.next();
            let right = operand(tokens)?;
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  span: token.span };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents an arithmetic,
/// comparison or equality operator and `None` for all other tokens, including
/// `and` / `or`, which build `Expr::Logical` nodes instead.
///
/// # Example
/// ```
/// use lox::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::And), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    match token {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}

/// Returns `true` for the ordering operators `<`, `<=`, `>`, `>=`.
///
/// # Example
/// ```
/// use lox::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::Less));
/// assert!(!is_relational_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}

/// Returns `true` for `==` and `!=`.
#[must_use]
pub const fn is_equality_op(op: BinaryOperator) -> bool {
    matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
}
