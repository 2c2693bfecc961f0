//! Abstract Syntax Tree definitions for Monkey.
//!
//! The tree is a closed family of owned nodes: every composite node exclusively owns its children, and nodes are
//! read-only once the parser hands them out.
//!
//! ## Notes
//! - Nodes carry no source spans. Two trees are equal when their structure is equal, regardless of the whitespace
//!   or redundant parentheses of the text they came from.
//! - [`fmt::Display`] renders the canonical, fully parenthesized form (e.g. `((-a)*b)`).

use std::fmt;

use monkey_core::lang::keywords::{self, KeywordId};
use monkey_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets, half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Common behavior of every AST node.
pub trait Node: fmt::Display {
    /// Literal text of the token the node starts from (`let`, `x`, `+`, ...).
    fn token_literal(&self) -> &str;
}

// ============================================================================
// Program
// ============================================================================

/// Tree root: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |stmt| stmt.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetStatement {
    pub name: Identifier,
    pub value: Expression,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStatement {
    pub value: Expression,
}

/// A bare expression used as a statement (`x + 10;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => s.token_literal(),
            Statement::Return(s) => s.token_literal(),
            Statement::Expression(s) => s.token_literal(),
        }
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        keywords::as_str(KeywordId::Let)
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        keywords::as_str(KeywordId::Return)
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.expression.token_literal()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{}", s),
            Statement::Return(s) => write!(f, "{}", s),
            Statement::Expression(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = {};", self.token_literal(), self.name, self.value)
    }
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {};", self.token_literal(), self.value)
    }
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Integer literal; `literal` keeps the source digits (`007` renders as `007`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub value: i64,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub literal: String,
}

/// `(<op><operand>)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixExpression {
    pub operator: OperatorId,
    pub operand: Box<Expression>,
}

impl PrefixExpression {
    /// Operator spelling (`!` or `-`).
    pub fn operator(&self) -> &'static str {
        operators::as_str(self.operator)
    }
}

/// `(<left><op><right>)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixExpression {
    pub operator: OperatorId,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl InfixExpression {
    /// Operator spelling (`+`, `==`, ...).
    pub fn operator(&self) -> &'static str {
        operators::as_str(self.operator)
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => e.token_literal(),
            Expression::Integer(e) => e.token_literal(),
            Expression::Boolean(e) => e.token_literal(),
            Expression::Prefix(e) => e.token_literal(),
            Expression::Infix(e) => e.token_literal(),
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.name
    }
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.literal
    }
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.literal
    }
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        self.operator()
    }
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        self.operator()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{}", e),
            Expression::Integer(e) => write!(f, "{}", e),
            Expression::Boolean(e) => write!(f, "{}", e),
            Expression::Prefix(e) => write!(f, "{}", e),
            Expression::Infix(e) => write!(f, "{}", e),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator(), self.operand)
    }
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{}{})", self.left, self.operator(), self.right)
    }
}
