//! Integer literal classification.

use super::{munch_run, Classification, Classifier};
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::unicode::is_digit;

/// Matches a run of decimal digits on a single line.
pub struct IntegerLiteral;

impl Classifier for IntegerLiteral {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn classify(&self, cursor: &mut Cursor) -> Classification {
        match munch_run(cursor, is_digit, is_digit) {
            Some((lexeme, consumed)) => Classification::Matched {
                kind: TokenKind::IntegerLiteral,
                lexeme,
                consumed,
            },
            None => Classification::NoMatch,
        }
    }
}
