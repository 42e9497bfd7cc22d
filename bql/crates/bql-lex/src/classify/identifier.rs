//! Identifier classification.

use super::{munch_run, Classification, Classifier};
use crate::cursor::Cursor;
use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_ident_start};

/// Matches `[letter _][letter digit _]*` on a single line.
pub struct Identifier;

impl Classifier for Identifier {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn classify(&self, cursor: &mut Cursor) -> Classification {
        match munch_run(cursor, is_ident_start, is_ident_continue) {
            Some((lexeme, consumed)) => Classification::Matched {
                kind: TokenKind::Identifier,
                lexeme,
                consumed,
            },
            None => Classification::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LineTerminator;

    fn lex_ident(source: &str) -> Option<String> {
        let mut cursor = Cursor::with_terminator(source, LineTerminator::Lf);
        match Identifier.classify(&mut cursor) {
            Classification::Matched { kind, lexeme, consumed } => {
                assert_eq!(kind, TokenKind::Identifier);
                assert_eq!(cursor.offset(), consumed);
                Some(lexeme)
            },
            Classification::NoMatch => None,
        }
    }

    #[test]
    fn test_simple_identifier() {
        assert_eq!(lex_ident("age"), Some("age".to_string()));
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(lex_ident("abc123"), Some("abc123".to_string()));
        assert_eq!(lex_ident("foo_bar_9 + 1"), Some("foo_bar_9".to_string()));
    }

    #[test]
    fn test_leading_underscore() {
        assert_eq!(lex_ident("_id"), Some("_id".to_string()));
        assert_eq!(lex_ident("_"), Some("_".to_string()));
    }

    #[test]
    fn test_unicode_letters() {
        assert_eq!(lex_ident("größe"), Some("größe".to_string()));
    }

    #[test]
    fn test_cannot_start_with_digit() {
        assert_eq!(lex_ident("1abc"), None);
    }

    #[test]
    fn test_stops_at_line_boundary() {
        assert_eq!(lex_ident("ab\ncd"), Some("ab".to_string()));
    }
}
