use tracing::{debug, trace};

use crate::{
    ast::{Expr, Identifier, Node},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, scan},
        parser::{binary::parse_logic_or, cursor::TokenCursor, statement::parse_declaration},
    },
    outcome::Outcome,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// What a top-level unit of the input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Each unit is a bare expression with no terminator.
    Expression,
    /// Each unit is a declaration or statement.
    #[default]
    Statement,
}

/// Turns source text into a sequence of top-level nodes.
///
/// The mode is fixed at construction. Parsing never stops at the first
/// error: each top-level unit is parsed on its own, and a failure is recorded
/// before moving on to the next one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    mode: ParseMode,
}

impl Parser {
    #[must_use]
    pub const fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Lexes and parses `source`.
    ///
    /// If scanning reports any error, those errors are returned and no
    /// parsing is attempted.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::parser::core::{ParseMode, Parser};
    ///
    /// let outcome = Parser::new(ParseMode::Statement).parse("var a = 1; print a;");
    /// assert!(!outcome.has_err());
    /// assert_eq!(outcome.success.len(), 2);
    ///
    /// let outcome = Parser::new(ParseMode::Statement).parse("42 42; 10 10;");
    /// assert_eq!(outcome.errors.len(), 2);
    /// ```
    #[must_use]
    pub fn parse(&self, source: &str) -> Outcome<Vec<Node>, Error> {
        let (tokens, lex_errors) = scan(source).into_parts();
        if !lex_errors.is_empty() {
            return Outcome::new(Vec::new(), lex_errors.into_iter().map(Error::from).collect());
        }

        self.parse_tokens(&tokens).map_err(Error::from)
    }

    /// Parses an already scanned token sequence.
    #[must_use]
    pub fn parse_tokens(&self, tokens: &[Token]) -> Outcome<Vec<Node>, ParseError> {
        let mut cursor = TokenCursor::new(tokens);
        let mut nodes = Vec::new();
        let mut errors = Vec::new();

        while !cursor.is_at_end() {
            let start = cursor.position();
            let parsed = match self.mode {
                ParseMode::Expression => parse_expression(&mut cursor).map(Node::Expression),
                ParseMode::Statement => parse_declaration(&mut cursor),
            };

            match parsed {
                Ok(node) => {
                    trace!(%node, "parsed top-level node");
                    nodes.push(node);
                },
                Err(error) => {
                    debug!(%error, "recorded syntax error");
                    errors.push(error);
                    if cursor.position() == start {
                        cursor.next();
                    }
                },
            }
        }

        debug!(nodes = nodes.len(), errors = errors.len(), mode = ?self.mode, "parse finished");
        Outcome::new(nodes, errors)
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, assignment, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := assignment`
///
/// # Parameters
/// - `tokens`: Cursor positioned at the first token of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    parse_assignment(tokens)
}

/// Parses a right-associative assignment.
///
/// The left side is parsed as an ordinary expression first; only when an `=`
/// follows is it checked to be a bare identifier.
///
/// Grammar: `assignment := logic_or ("=" assignment)?`
///
/// # Errors
/// `UnexpectedToken` at the `=` if the target is not a variable, e.g.
/// `1 = 2` or `(a) = 2`.
pub fn parse_assignment(tokens: &mut TokenCursor<'_>) -> ParseResult<Expr> {
    let target = parse_logic_or(tokens)?;

    let Some(equal) = tokens.next_if(|kind| *kind == TokenKind::Equal) else {
        return Ok(target);
    };
    let value = parse_assignment(tokens)?;

    match target {
        Expr::Terminal(Token { kind: TokenKind::Identifier(name),
                               span, }) => Ok(Expr::Assignment { name:  Identifier { name, span },
                                                                 value: Box::new(value),
                                                                 span:  equal.span, }),
        _ => Err(ParseError::UnexpectedToken { token: equal.kind.lexeme(),
                                               span:  equal.span, }),
    }
}
