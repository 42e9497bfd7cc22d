//! Whitespace classification.

use super::{Classification, Classifier};
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::unicode::is_trivia;

/// Matches exactly one whitespace character.
///
/// Consecutive whitespace is not merged: each character becomes its own
/// [`TokenKind::Space`] token.
pub struct Trivia;

impl Classifier for Trivia {
    fn name(&self) -> &'static str {
        "trivia"
    }

    fn classify(&self, cursor: &mut Cursor) -> Classification {
        match cursor.peek() {
            Some(c) if is_trivia(c) => {
                cursor.read();
                Classification::Matched {
                    kind: TokenKind::Space,
                    lexeme: String::new(),
                    consumed: 1,
                }
            },
            _ => Classification::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LineTerminator;

    fn classify(source: &str) -> (Classification, usize) {
        let mut cursor = Cursor::with_terminator(source, LineTerminator::Lf);
        let result = Trivia.classify(&mut cursor);
        (result, cursor.offset())
    }

    #[test]
    fn test_single_space() {
        let (result, offset) = classify(" x");
        assert_eq!(
            result,
            Classification::Matched {
                kind: TokenKind::Space,
                lexeme: String::new(),
                consumed: 1,
            }
        );
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_does_not_merge_runs() {
        let (_, offset) = classify("\t\t  ");
        assert_eq!(offset, 1);
    }

    #[test]
    fn test_non_whitespace() {
        assert_eq!(classify("x"), (Classification::NoMatch, 0));
        assert_eq!(classify(""), (Classification::NoMatch, 0));
    }
}
