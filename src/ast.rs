use std::fmt;

use crate::{
    interpreter::lexer::{Token, TokenKind, format_literal_number},
    span::Span,
};

/// A name as written in the source, together with its location.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
    /// Location of the identifier token.
    pub span: Span,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every variant carries the span of the token that introduced it (the
/// operator for unary, binary and logical nodes, the `=` for assignments, the
/// opening parenthesis for groups).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal or variable reference: `NUMBER`, `STRING`, `true`, `false`,
    /// `nil` or `IDENTIFIER`.
    Terminal(Token),
    /// A parenthesized expression.
    Group {
        /// The enclosed expression.
        inner: Box<Self>,
        /// Location of the opening parenthesis.
        span:  Span,
    },
    /// A prefix operation (`-x`, `!x`).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location of the operator.
        span: Span,
    },
    /// An arithmetic, comparison or equality operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location of the operator.
        span:  Span,
    },
    /// A short-circuiting `and` / `or`.
    Logical {
        /// Left operand, always evaluated.
        left:  Box<Self>,
        /// The operator.
        op:    LogicalOperator,
        /// Right operand, evaluated only when the left one does not decide.
        right: Box<Self>,
        /// Location of the operator.
        span:  Span,
    },
    /// Assignment to an existing variable.
    Assignment {
        /// The variable being assigned.
        name:  Identifier,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Location of the `=`.
        span:  Span,
    },
}

impl Expr {
    /// Gets the span from `self`.
    ///
    /// ## Example
    /// ```
    /// use lox::{
    ///     ast::Expr,
    ///     interpreter::lexer::{Token, TokenKind},
    ///     span::Span,
    /// };
    ///
    /// let expr = Expr::Terminal(Token::new(TokenKind::Nil, Span::new(5, 40, 3)));
    ///
    /// assert_eq!(expr.span().line, 5);
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Terminal(token) => token.span,
            Self::Group { span, .. }
            | Self::Unary { span, .. }
            | Self::Binary { span, .. }
            | Self::Logical { span, .. }
            | Self::Assignment { span, .. } => *span,
        }
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   Identifier,
    /// The parameter names.
    pub params: Vec<Identifier>,
    /// The declarations making up the body.
    pub body:   Vec<Node>,
    /// Location of the `fun` keyword, or of the name for methods.
    pub span:   Span,
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// The name of the class.
    pub name:       Identifier,
    /// The class named after `<`, if any.
    pub superclass: Option<Identifier>,
    /// Method declarations in source order.
    pub methods:    Vec<FunctionDecl>,
    /// Location of the `class` keyword.
    pub span:       Span,
}

/// A top-level unit of a program: a declaration, a statement or, in
/// expression mode, a bare expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A bare expression, only produced in expression mode.
    Expression(Expr),
    /// An expression followed by `;`.
    ExprStmt {
        /// The expression to evaluate.
        expr: Expr,
        /// Location of the expression.
        span: Span,
    },
    /// `print expr;`
    PrintStmt {
        /// The value to print.
        expr: Expr,
        /// Location of the `print` keyword.
        span: Span,
    },
    /// `var name = initializer;`
    VarDecl {
        /// The declared variable.
        name:        Identifier,
        /// The initial value; `nil` when absent.
        initializer: Option<Expr>,
        /// Location of the `var` keyword.
        span:        Span,
    },
    /// `{ declarations }`
    Block {
        /// Declarations inside the block, at least one.
        nodes: Vec<Self>,
        /// Location of the opening brace.
        span:  Span,
    },
    /// `if condition then else otherwise`
    IfStmt {
        /// The condition.
        condition:   Expr,
        /// Statement run when the condition holds.
        then_branch: Box<Self>,
        /// Statement run otherwise.
        else_branch: Option<Box<Self>>,
        /// Location of the `if` keyword.
        span:        Span,
    },
    /// `while condition body`
    WhileStmt {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Location of the `while` keyword.
        span:      Span,
    },
    /// `for (initializer; condition; increment) body`
    ForStmt {
        /// Runs once before the loop.
        initializer: Option<Box<Self>>,
        /// Checked before each iteration.
        condition:   Option<Expr>,
        /// Runs after each iteration.
        increment:   Option<Expr>,
        /// The loop body.
        body:        Box<Self>,
        /// Location of the `for` keyword.
        span:        Span,
    },
    /// `return value;`
    ReturnStmt {
        /// The returned value, if any.
        value: Option<Expr>,
        /// Location of the `return` keyword.
        span:  Span,
    },
    /// `class Name < Super { methods }`
    ClassDecl(ClassDecl),
    /// `fun name(params) { body }`
    FunDecl(FunctionDecl),
}

impl Node {
    /// Gets the span from `self`.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Expression(expr) => expr.span(),
            Self::ExprStmt { span, .. }
            | Self::PrintStmt { span, .. }
            | Self::VarDecl { span, .. }
            | Self::Block { span, .. }
            | Self::IfStmt { span, .. }
            | Self::WhileStmt { span, .. }
            | Self::ForStmt { span, .. }
            | Self::ReturnStmt { span, .. } => *span,
            Self::ClassDecl(class) => class.span,
            Self::FunDecl(function) => function.span,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and equality.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `!x`).
    Not,
}

/// Represents a short-circuiting logical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogicalOperator {
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Renders an expression in parenthesized prefix form.
///
/// # Example
/// ```
/// use lox::interpreter::parser::core::{ParseMode, Parser};
///
/// let nodes = Parser::new(ParseMode::Expression).parse("-(1 + 2) * 3").success;
///
/// assert_eq!(nodes[0].to_string(), "(* (- (group (+ 1.0 2.0))) 3.0)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(token) => match &token.kind {
                TokenKind::Number(number) => write!(f, "{}", format_literal_number(number.value)),
                TokenKind::String(content) => write!(f, "{content}"),
                kind => write!(f, "{}", kind.lexeme()),
            },
            Self::Group { inner, .. } => write!(f, "(group {inner})"),
            Self::Unary { op, expr, .. } => write!(f, "({op} {expr})"),
            Self::Binary { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Logical { left, op, right, .. } => write!(f, "({op} {left} {right})"),
            Self::Assignment { name, value, .. } => write!(f, "(= {name} {value})"),
        }
    }
}

fn write_optional<T: fmt::Display>(f: &mut fmt::Formatter<'_>, item: Option<&T>) -> fmt::Result {
    match item {
        Some(item) => write!(f, " {item}"),
        None => write!(f, " _"),
    }
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params
                         .iter()
                         .map(|param| param.name.as_str())
                         .collect::<Vec<_>>()
                         .join(" ");
        write!(f, "(fun {} ({params})", self.name)?;
        for node in &self.body {
            write!(f, " {node}")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(class {}", self.name)?;
        if let Some(superclass) = &self.superclass {
            write!(f, " < {superclass}")?;
        }
        for method in &self.methods {
            write!(f, " {method}")?;
        }
        write!(f, ")")
    }
}

/// Renders a node in parenthesized prefix form. Absent optional parts of a
/// `for` header print as `_`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression(expr) => write!(f, "{expr}"),
            Self::ExprStmt { expr, .. } => write!(f, "(; {expr})"),
            Self::PrintStmt { expr, .. } => write!(f, "(print {expr})"),
            Self::VarDecl { name,
                            initializer, .. } => match initializer {
                Some(value) => write!(f, "(var {name} {value})"),
                None => write!(f, "(var {name})"),
            },
            Self::Block { nodes, .. } => {
                write!(f, "(block")?;
                for node in nodes {
                    write!(f, " {node}")?;
                }
                write!(f, ")")
            },
            Self::IfStmt { condition,
                           then_branch,
                           else_branch,
                           .. } => match else_branch {
                Some(otherwise) => write!(f, "(if {condition} {then_branch} {otherwise})"),
                None => write!(f, "(if {condition} {then_branch})"),
            },
            Self::WhileStmt { condition, body, .. } => write!(f, "(while {condition} {body})"),
            Self::ForStmt { initializer,
                            condition,
                            increment,
                            body,
                            .. } => {
                write!(f, "(for")?;
                write_optional(f, initializer.as_deref())?;
                write_optional(f, condition.as_ref())?;
                write_optional(f, increment.as_ref())?;
                write!(f, " {body})")
            },
            Self::ReturnStmt { value, .. } => match value {
                Some(value) => write!(f, "(return {value})"),
                None => write!(f, "(return)"),
            },
            Self::ClassDecl(class) => write!(f, "{class}"),
            Self::FunDecl(function) => write!(f, "{function}"),
        }
    }
}
