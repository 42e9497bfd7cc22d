//! Operator classification.
//!
//! Handles: `+ - * / %`, `= == ! != > >= < <=`, `&& ||`.

use super::{Classification, Classifier};
use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Matches one operator, preferring the two-character form.
///
/// The second character of a compound operator must be on the same physical
/// line as the first. `&` and `|` only exist doubled; a lone one does not
/// match and leaves the cursor untouched.
pub struct Operator;

impl Operator {
    /// Lexes `bare` or, if followed by `=`, `with_eq`.
    fn lex_optional_eq(cursor: &mut Cursor, bare: TokenKind, with_eq: TokenKind) -> (TokenKind, usize) {
        cursor.read();
        if cursor.peek_in_line() == Some('=') {
            cursor.read();
            (with_eq, 2)
        } else {
            (bare, 1)
        }
    }

    /// Lexes a doubled operator such as `&&`.
    fn lex_doubled(cursor: &mut Cursor, c: char, kind: TokenKind) -> Option<(TokenKind, usize)> {
        cursor.read();
        if cursor.peek_in_line() == Some(c) {
            cursor.read();
            Some((kind, 2))
        } else {
            cursor.unread();
            None
        }
    }

    fn lex_single(cursor: &mut Cursor, kind: TokenKind) -> (TokenKind, usize) {
        cursor.read();
        (kind, 1)
    }
}

impl Classifier for Operator {
    fn name(&self) -> &'static str {
        "operator"
    }

    fn classify(&self, cursor: &mut Cursor) -> Classification {
        let Some(c) = cursor.peek() else {
            return Classification::NoMatch;
        };

        let matched = match c {
            '+' => Some(Self::lex_single(cursor, TokenKind::Plus)),
            '-' => Some(Self::lex_single(cursor, TokenKind::Minus)),
            '*' => Some(Self::lex_single(cursor, TokenKind::Multiplication)),
            '/' => Some(Self::lex_single(cursor, TokenKind::Division)),
            '%' => Some(Self::lex_single(cursor, TokenKind::Modulo)),
            '=' => Some(Self::lex_optional_eq(cursor, TokenKind::Assignment, TokenKind::EqualTo)),
            '!' => Some(Self::lex_optional_eq(cursor, TokenKind::Not, TokenKind::NotEqualTo)),
            '>' => Some(Self::lex_optional_eq(
                cursor,
                TokenKind::GreaterThan,
                TokenKind::GreaterOrEqual,
            )),
            '<' => Some(Self::lex_optional_eq(cursor, TokenKind::LessThan, TokenKind::LessOrEqual)),
            '&' => Self::lex_doubled(cursor, '&', TokenKind::And),
            '|' => Self::lex_doubled(cursor, '|', TokenKind::Or),
            _ => None,
        };

        match matched {
            Some((kind, consumed)) => Classification::Matched {
                kind,
                lexeme: String::new(),
                consumed,
            },
            None => Classification::NoMatch,
        }
    }
}
