use std::fmt;

use logos::Logos;
use tracing::{debug, trace};

use crate::{error::LexError, outcome::Outcome, span::Span};

/// The kind of a lexical token, together with its literal payload.
///
/// The set is closed: punctuation and operators, the three literal kinds and
/// the reserved words. Keywords are matched only when a whole identifier run
/// spells them, so `orchid` is an identifier and `or` a keyword.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexingError)]
pub enum TokenKind {
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,

    /// Numeric literals such as `42`, `3.14` or `1.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    Number(Number),
    /// String literals. The payload excludes the quotes and is taken
    /// verbatim; there are no escape sequences.
    #[regex(r#""[^"]*"?"#, lex_string, allow_greedy = true)]
    String(String),
    /// Identifier tokens; variable, function or class names.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,

    /// `// Comments.` Skipped, never produced.
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks. Skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns. Skipped, never produced.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// A numeric literal: its value and the text it was written as.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The parsed value. A trailing `.` reads as `.0`.
    pub value:  f64,
    /// The lexeme exactly as it appeared in the source.
    pub lexeme: String,
}

/// Additional information carried by the lexer during tokenization.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Failure reported by a single logos match, before a span is attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexingError {
    /// Nothing matched at this position.
    #[default]
    UnexpectedCharacter,
    /// A string literal ran into the end of input.
    UnterminatedString,
}

/// A token together with where it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was found.
    pub kind: TokenKind,
    /// Exactly the characters consumed for it.
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Scans `source` into tokens.
///
/// Scanning never stops early: every lexical error is collected and the scan
/// resumes right after it, so one pass reports all of them.
///
/// # Example
/// ```
/// use lox::interpreter::lexer::{TokenKind, scan};
///
/// let outcome = scan("var answer = 42;");
///
/// assert!(!outcome.has_err());
/// assert_eq!(outcome.success.len(), 5);
/// assert_eq!(outcome.success[0].kind, TokenKind::Var);
///
/// let outcome = scan("1 $ 2 #");
/// assert_eq!(outcome.success.len(), 2);
/// assert_eq!(outcome.errors.len(), 2);
/// ```
#[must_use]
pub fn scan(source: &str) -> Outcome<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let slice = lexer.slice();
        let line = lexer.extras.line;
        // Strings may span lines; the token keeps its starting line.
        lexer.extras.line += slice.matches('\n').count();

        match result {
            Ok(kind) => {
                trace!(?kind, line, offset = range.start, "scanned token");
                tokens.push(Token::new(kind, Span::new(line, range.start, range.len())));
            },
            Err(LexingError::UnterminatedString) => {
                errors.push(LexError::UnterminatedString { content: slice[1..].to_string(),
                                                           span:    Span::new(lexer.extras.line,
                                                                              range.end,
                                                                              0), });
            },
            Err(LexingError::UnexpectedCharacter) => {
                let character = slice.chars().next().unwrap_or_default();
                errors.push(LexError::UnexpectedCharacter { character,
                                                            span: Span::new(line,
                                                                            range.start,
                                                                            character.len_utf8()) });
            },
        }
    }

    debug!(tokens = tokens.len(), errors = errors.len(), "scan finished");
    Outcome::new(tokens, errors)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(Number)`: The value and the lexeme as written.
/// - `None`: If the slice is not a valid float, which the regex rules out.
fn lex_number(lex: &logos::Lexer<TokenKind>) -> Option<Number> {
    let lexeme = lex.slice();
    let value = lexeme.parse().ok()?;

    Some(Number { value,
                  lexeme: lexeme.to_string() })
}

/// Extracts the content of a string literal, or reports that its closing
/// quote is missing.
fn lex_string(lex: &logos::Lexer<TokenKind>) -> Result<String, LexingError> {
    let slice = lex.slice();

    if slice.len() >= 2 && slice.ends_with('"') {
        Ok(slice[1..slice.len() - 1].to_string())
    } else {
        Err(LexingError::UnterminatedString)
    }
}

/// Formats a number literal the way token listings show it: always with a
/// fractional part, so `42` becomes `42.0`.
#[must_use]
pub fn format_literal_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl TokenKind {
    /// The upper-case name used in token listings, e.g. `LEFT_PAREN`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Semicolon => "SEMICOLON",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Number(_) => "NUMBER",
            Self::String(_) => "STRING",
            Self::Identifier(_) => "IDENTIFIER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Ignored => "IGNORED",
        }
    }

    /// The source text of the token.
    ///
    /// # Example
    /// ```
    /// use lox::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::LessEqual.lexeme(), "<=");
    /// assert_eq!(TokenKind::String("hi".into()).lexeme(), "\"hi\"");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> String {
        let text = match self {
            Self::Number(number) => return number.lexeme.clone(),
            Self::String(content) => return format!("\"{content}\""),
            Self::Identifier(name) => return name.clone(),
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Semicolon => ";",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Bang => "!",
            Self::BangEqual => "!=",
            Self::Equal => "=",
            Self::EqualEqual => "==",
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            Self::Comment | Self::NewLine | Self::Ignored => "",
        };
        text.to_string()
    }

    /// The literal value column of a token listing, or `null`.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Number(number) => format_literal_number(number.value),
            Self::String(content) => content.clone(),
            _ => "null".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name(), self.lexeme(), self.literal())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
