//! Token definitions for the BabylonDB query language.
//!
//! A [`Token`] is an immutable `(kind, lexeme, line)` triple. The kind is a
//! [`TokenKind`]; its discriminants are stable so they can be stored or sent
//! over the wire by tools that consume the token stream.

use std::fmt;

use crate::error::LexError;

/// Token categories a parser matches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum TokenKind {
    // Keywords
    /// `WHERE`
    Where = 1,
    /// `VAR`
    Var = 2,
    /// `SELECT`
    Select = 3,
    /// `FIRST`
    First = 4,
    /// `BETWEEN`
    Between = 5,
    /// `MATCH`
    Match = 6,
    /// `ORDER`
    Order = 7,

    // Literals
    /// A run of decimal digits.
    IntegerLiteral = 10,

    // Names
    /// A name such as a field or variable.
    Identifier = 20,

    // Arithmetic operators
    /// `=`
    Assignment = 30,
    /// `+`
    Plus = 31,
    /// `-`
    Minus = 32,
    /// `*`
    Multiplication = 33,
    /// `/`
    Division = 34,
    /// `%`
    Modulo = 35,

    // Comparison operators
    /// `==`
    EqualTo = 36,
    /// `!=`
    NotEqualTo = 37,
    /// `>`
    GreaterThan = 38,
    /// `<`
    LessThan = 39,
    /// `>=`
    GreaterOrEqual = 40,
    /// `<=`
    LessOrEqual = 41,

    // Logical operators
    /// `!`
    Not = 42,
    /// `&&`
    And = 43,
    /// `||`
    Or = 44,

    // Trivia
    /// A single whitespace character.
    Space = 60,
}

/// Keyword spellings, upper case.
pub const KEYWORDS: [(&str, TokenKind); 7] = [
    ("WHERE", TokenKind::Where),
    ("VAR", TokenKind::Var),
    ("SELECT", TokenKind::Select),
    ("FIRST", TokenKind::First),
    ("BETWEEN", TokenKind::Between),
    ("MATCH", TokenKind::Match),
    ("ORDER", TokenKind::Order),
];

/// Looks up a keyword, ignoring case.
///
/// # Example
///
/// ```
/// use bql_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("where"), Some(TokenKind::Where));
/// assert_eq!(keyword_from_ident("Select"), Some(TokenKind::Select));
/// assert_eq!(keyword_from_ident("wherever"), None);
/// ```
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| spelling.eq_ignore_ascii_case(text))
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// Returns true for keyword kinds.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Where
                | TokenKind::Var
                | TokenKind::Select
                | TokenKind::First
                | TokenKind::Between
                | TokenKind::Match
                | TokenKind::Order
        )
    }

    /// Returns true for arithmetic, comparison, and logical operators.
    pub fn is_operator(self) -> bool {
        self.symbol().is_some() && !self.is_keyword()
    }

    /// Returns true for whitespace tokens.
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Space
    }

    /// Returns the fixed text of operator and keyword kinds.
    pub fn symbol(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Where => "WHERE",
            TokenKind::Var => "VAR",
            TokenKind::Select => "SELECT",
            TokenKind::First => "FIRST",
            TokenKind::Between => "BETWEEN",
            TokenKind::Match => "MATCH",
            TokenKind::Order => "ORDER",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiplication => "*",
            TokenKind::Division => "/",
            TokenKind::Modulo => "%",
            TokenKind::EqualTo => "==",
            TokenKind::NotEqualTo => "!=",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThan => "<",
            TokenKind::GreaterOrEqual => ">=",
            TokenKind::LessOrEqual => "<=",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::IntegerLiteral | TokenKind::Identifier | TokenKind::Space => return None,
        };
        Some(text)
    }

    /// Returns the stable numeric code of the kind.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Returns the variant name, e.g. `"GreaterOrEqual"`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Where => "Where",
            TokenKind::Var => "Var",
            TokenKind::Select => "Select",
            TokenKind::First => "First",
            TokenKind::Between => "Between",
            TokenKind::Match => "Match",
            TokenKind::Order => "Order",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Assignment => "Assignment",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Multiplication => "Multiplication",
            TokenKind::Division => "Division",
            TokenKind::Modulo => "Modulo",
            TokenKind::EqualTo => "EqualTo",
            TokenKind::NotEqualTo => "NotEqualTo",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::LessThan => "LessThan",
            TokenKind::GreaterOrEqual => "GreaterOrEqual",
            TokenKind::LessOrEqual => "LessOrEqual",
            TokenKind::Not => "Not",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Space => "Space",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) if self.is_operator() => write!(f, "'{}'", symbol),
            _ => f.write_str(self.name()),
        }
    }
}

/// A classified piece of source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: String, line: u32) -> Self {
        Self { kind, lexeme, line }
    }

    /// The token's category.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matched text. Empty for trivia and operators.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Physical line (1-based) of the token's first character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Text of the token as it would be written back out.
    pub fn text(&self) -> &str {
        match self.kind {
            TokenKind::Space => " ",
            kind if kind.is_operator() => kind.symbol().unwrap_or_default(),
            _ => &self.lexeme,
        }
    }

    /// Parses the value of an integer literal.
    ///
    /// # Example
    ///
    /// ```
    /// use bql_lex::{TokenStream, TokenKind};
    ///
    /// let mut stream = TokenStream::new("42");
    /// let token = stream.get().unwrap().unwrap();
    /// assert_eq!(token.kind(), TokenKind::IntegerLiteral);
    /// assert_eq!(token.int_value(), Ok(42));
    /// ```
    pub fn int_value(&self) -> Result<i64, LexError> {
        if self.kind != TokenKind::IntegerLiteral {
            return Err(LexError::NotAnInteger {
                line: self.line,
                kind: self.kind,
            });
        }
        self.lexeme
            .parse()
            .map_err(|_| LexError::IntegerOverflow {
                line: self.line,
                lexeme: self.lexeme.clone(),
            })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::IntegerLiteral => {
                write!(f, "{}({:?})", self.kind.name(), self.lexeme)
            },
            kind => f.write_str(kind.name()),
        }
    }
}
