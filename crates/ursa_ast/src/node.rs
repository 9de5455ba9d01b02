//! Syntax tree node definitions.
//!
//! The parser owns construction; nodes are immutable afterwards. Ownership is
//! a strict tree rooted at `Program` — no sharing, no back references.
//! `Display` renders the canonical parenthesized form used by the round-trip
//! tests, and `token_literal` exposes the origin token of every node.

use crate::token::Token;
use std::fmt;

// ============================================================================
// Program
// ============================================================================

/// The root node: an ordered sequence of top-level statements.
/// Statement order equals source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// The literal of the first statement's origin token, or "" for an
    /// empty program.
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => &s.token.literal,
            Statement::Return(s) => &s.token.literal,
            Statement::Expression(s) => &s.token.literal,
        }
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

/// `let <name>: <type> = <value>;`
///
/// The initializer is skimmed over rather than parsed, so `value` is `None`
/// for every statement the parser currently produces.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` keyword token.
    pub token: Token,
    /// The bound name.
    pub name: Identifier,
    /// The declared fixed-width type keyword token.
    pub ty: Token,
    /// The initializer expression, once the let rule captures it.
    pub value: Option<Expression>,
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.token.literal, self.name, self.ty.literal)?;
        match &self.value {
            Some(value) => write!(f, " = {};", value),
            None => write!(f, ";"),
        }
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The `return` keyword token.
    pub token: Token,
    /// The return-value expression, once the return rule captures it.
    pub value: Option<Expression>,
}

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.literal, value),
            None => write!(f, "{};", self.token.literal),
        }
    }
}

/// A bare expression used as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The first token of the expression.
    pub token: Token,
    /// `None` when no prefix rule applied; the diagnostic list says why.
    pub expression: Option<Expression>,
}

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => &e.token.literal,
            Expression::Integer(e) => &e.token.literal,
            Expression::Boolean(e) => &e.token.literal,
            Expression::Prefix(e) => &e.token.literal,
            Expression::Infix(e) => &e.token.literal,
        }
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

/// A leaf expression naming a binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A numeric literal parsed as a 64-bit signed integer.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// `true` or `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boolean {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for Boolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// A prefix operator applied to one operand: `-x`, `!x`, `~x`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    /// The operator token.
    pub token: Token,
    pub operator: String,
    /// `None` when the operand failed to parse.
    pub right: Option<Box<Expression>>,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        write!(f, ")")
    }
}

/// A binary operator with left and right operands.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    /// The operator token.
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    /// `None` when the right operand failed to parse.
    pub right: Option<Box<Expression>>,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        if let Some(right) = &self.right {
            write!(f, "{}", right)?;
        }
        write!(f, ")")
    }
}
