//! Error types for the query lexer.

use thiserror::Error;

use crate::token::TokenKind;

/// Lexical failures reported by the token stream.
///
/// End of input is not an error: [`crate::TokenStream::get`] reports it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No classifier matched the character at this location. The character
    /// has not been consumed.
    #[error("line {line}, column {column}: unexpected character '{ch}'")]
    UnexpectedChar {
        /// Line of the character (1-based).
        line: u32,
        /// Column of the character (1-based).
        column: u32,
        /// The offending character.
        ch: char,
    },

    /// An integer literal does not fit in an `i64`.
    #[error("line {line}: integer literal {lexeme} is out of range")]
    IntegerOverflow {
        /// Line of the literal (1-based).
        line: u32,
        /// The literal's digits.
        lexeme: String,
    },

    /// A value was requested from a token that is not an integer literal.
    #[error("line {line}: {kind} token is not an integer literal")]
    NotAnInteger {
        /// Line of the token (1-based).
        line: u32,
        /// Kind of the token.
        kind: TokenKind,
    },
}

impl LexError {
    /// Line (1-based) the error refers to.
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedChar { line, .. }
            | LexError::IntegerOverflow { line, .. }
            | LexError::NotAnInteger { line, .. } => *line,
        }
    }
}

/// Pushback failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UngetError {
    /// `unget` was called before any `get`, or twice in a row.
    #[error("nothing to unget: only the most recent token can be pushed back")]
    NothingToUnget,
}

/// Result type alias for lexing operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
