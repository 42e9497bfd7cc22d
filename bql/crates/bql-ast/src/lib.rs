//! bql-ast - Expression Shapes for the BabylonDB Query Language
//!
//! Query clauses (`WHERE`, `SELECT`, `FIRST`, `BETWEEN`, `MATCH`, `ORDER`)
//! are built over arithmetic and logical expressions. This crate holds the
//! expression tree a parser produces from the token stream, and the mapping
//! from operator token kinds to tree operators.
//!
//! # Example
//!
//! ```
//! use bql_ast::{BinaryOp, Expression};
//! use bql_lex::TokenKind;
//!
//! let op = BinaryOp::from_kind(TokenKind::GreaterOrEqual).unwrap();
//! let expr = Expression::binary(Expression::name("age"), op, Expression::literal(18));
//! assert_eq!(expr.to_string(), "(age >= 18)");
//! ```

use std::fmt;

use bql_lex::{LexResult, Token, TokenKind};

/// Binding power of prefix operators; tighter than any infix operator.
pub const PREFIX_BINDING_POWER: u8 = 15;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `=`
    Assign,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `&&`
    And,
    /// `||`
    Or,
}

impl BinaryOp {
    /// Converts an operator token kind into a binary operator.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Assignment => Some(BinaryOp::Assign),
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Multiplication => Some(BinaryOp::Mul),
            TokenKind::Division => Some(BinaryOp::Div),
            TokenKind::Modulo => Some(BinaryOp::Mod),

            TokenKind::EqualTo => Some(BinaryOp::Eq),
            TokenKind::NotEqualTo => Some(BinaryOp::Ne),
            TokenKind::GreaterThan => Some(BinaryOp::Gt),
            TokenKind::LessThan => Some(BinaryOp::Lt),
            TokenKind::GreaterOrEqual => Some(BinaryOp::Ge),
            TokenKind::LessOrEqual => Some(BinaryOp::Le),

            TokenKind::And => Some(BinaryOp::And),
            TokenKind::Or => Some(BinaryOp::Or),

            _ => None,
        }
    }

    /// The token kind this operator is written as.
    pub fn kind(self) -> TokenKind {
        match self {
            BinaryOp::Assign => TokenKind::Assignment,
            BinaryOp::Add => TokenKind::Plus,
            BinaryOp::Sub => TokenKind::Minus,
            BinaryOp::Mul => TokenKind::Multiplication,
            BinaryOp::Div => TokenKind::Division,
            BinaryOp::Mod => TokenKind::Modulo,
            BinaryOp::Eq => TokenKind::EqualTo,
            BinaryOp::Ne => TokenKind::NotEqualTo,
            BinaryOp::Gt => TokenKind::GreaterThan,
            BinaryOp::Lt => TokenKind::LessThan,
            BinaryOp::Ge => TokenKind::GreaterOrEqual,
            BinaryOp::Le => TokenKind::LessOrEqual,
            BinaryOp::And => TokenKind::And,
            BinaryOp::Or => TokenKind::Or,
        }
    }

    /// Source text of the operator.
    pub fn symbol(self) -> &'static str {
        self.kind().symbol().unwrap_or_default()
    }

    /// Returns `(left, right)` binding powers for Pratt parsing.
    ///
    /// Higher numbers bind tighter. Left-associative operators have
    /// `right = left + 1`; assignment is right-associative.
    ///
    /// | Operators | Left | Right |
    /// |-----------|------|-------|
    /// | `=` | 2 | 1 |
    /// | `\|\|` | 3 | 4 |
    /// | `&&` | 5 | 6 |
    /// | `==`, `!=` | 7 | 8 |
    /// | `<`, `<=`, `>`, `>=` | 9 | 10 |
    /// | `+`, `-` | 11 | 12 |
    /// | `*`, `/`, `%` | 13 | 14 |
    pub fn binding_power(self) -> (u8, u8) {
        match self {
            BinaryOp::Assign => (2, 1),
            BinaryOp::Or => (3, 4),
            BinaryOp::And => (5, 6),
            BinaryOp::Eq | BinaryOp::Ne => (7, 8),
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => (9, 10),
            BinaryOp::Add | BinaryOp::Sub => (11, 12),
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => (13, 14),
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
}

impl UnaryOp {
    /// Converts a token kind in prefix position into a unary operator.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Not => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// Source text of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

/// A query expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Integer literal.
    Literal(i64),
    /// Field or variable name.
    Name(String),
    /// Prefix operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<Expression>,
    },
    /// Infix operation.
    Binary {
        /// Left operand.
        left: Box<Expression>,
        /// The operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// Creates a literal.
    pub fn literal(value: i64) -> Self {
        Expression::Literal(value)
    }

    /// Creates a name.
    pub fn name(name: impl Into<String>) -> Self {
        Expression::Name(name.into())
    }

    /// Creates a prefix operation.
    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Creates an infix operation.
    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// Builds an operand from an identifier or integer literal token.
    ///
    /// Returns `Ok(None)` for tokens that cannot be operands.
    pub fn from_operand(token: &Token) -> LexResult<Option<Self>> {
        match token.kind() {
            TokenKind::Identifier => Ok(Some(Expression::name(token.lexeme()))),
            TokenKind::IntegerLiteral => token.int_value().map(|value| Some(Expression::literal(value))),
            _ => Ok(None),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        match self {
            Expression::Literal(_) | Expression::Name(_) => 1,
            Expression::Unary { operand, .. } => 1 + operand.node_count(),
            Expression::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

impl fmt::Display for Expression {
    /// Writes the expression fully parenthesized.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Name(name) => f.write_str(name),
            Expression::Unary { op, operand } => write!(f, "({}{})", op.symbol(), operand),
            Expression::Binary { left, op, right } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            },
        }
    }
}
