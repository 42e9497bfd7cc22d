//! Keyword classification.

use super::{munch_run, Classification, Classifier};
use crate::cursor::Cursor;
use crate::token::keyword_from_ident;
use crate::unicode::{is_ident_continue, is_keyword_char};

/// Matches a case-insensitive keyword.
///
/// Reads the longest run of letters on the current line. The run is a
/// keyword only if it spells one and the identifier it belongs to ends
/// there, so `Where1` and `where_` fall through to the identifier
/// classifier.
pub struct Keyword;

impl Classifier for Keyword {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, cursor: &mut Cursor) -> Classification {
        let Some((lexeme, consumed)) = munch_run(cursor, is_keyword_char, is_keyword_char) else {
            return Classification::NoMatch;
        };

        let continues = cursor.peek_in_line().is_some_and(is_ident_continue);
        match keyword_from_ident(&lexeme) {
            Some(kind) if !continues => Classification::Matched {
                kind,
                lexeme,
                consumed,
            },
            _ => {
                cursor.unread_span(consumed);
                Classification::NoMatch
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LineTerminator;
    use crate::token::TokenKind;

    fn lex_kw(source: &str) -> Classification {
        let mut cursor = Cursor::with_terminator(source, LineTerminator::Lf);
        let result = Keyword.classify(&mut cursor);
        if result == Classification::NoMatch {
            assert_eq!(cursor.offset(), 0, "no match must not consume");
        }
        result
    }

    fn matched(kind: TokenKind, lexeme: &str) -> Classification {
        Classification::Matched {
            kind,
            lexeme: lexeme.to_string(),
            consumed: lexeme.chars().count(),
        }
    }

    #[test]
    fn test_all_keywords() {
        assert_eq!(lex_kw("WHERE"), matched(TokenKind::Where, "WHERE"));
        assert_eq!(lex_kw("var"), matched(TokenKind::Var, "var"));
        assert_eq!(lex_kw("Select"), matched(TokenKind::Select, "Select"));
        assert_eq!(lex_kw("first"), matched(TokenKind::First, "first"));
        assert_eq!(lex_kw("BeTwEeN"), matched(TokenKind::Between, "BeTwEeN"));
        assert_eq!(lex_kw("match"), matched(TokenKind::Match, "match"));
        assert_eq!(lex_kw("Order"), matched(TokenKind::Order, "Order"));
    }

    #[test]
    fn test_keyword_followed_by_operator() {
        assert_eq!(lex_kw("var="), matched(TokenKind::Var, "var"));
        assert_eq!(lex_kw("where x"), matched(TokenKind::Where, "where"));
    }

    #[test]
    fn test_keyword_prefix_of_longer_word() {
        assert_eq!(lex_kw("wherever"), Classification::NoMatch);
        assert_eq!(lex_kw("variable"), Classification::NoMatch);
    }

    #[test]
    fn test_keyword_followed_by_digit_or_underscore() {
        assert_eq!(lex_kw("Where1"), Classification::NoMatch);
        assert_eq!(lex_kw("select_"), Classification::NoMatch);
    }

    #[test]
    fn test_keyword_at_end_of_line() {
        assert_eq!(lex_kw("where\nx"), matched(TokenKind::Where, "where"));
        assert_eq!(lex_kw("wh\nere"), Classification::NoMatch);
    }

    #[test]
    fn test_non_letters() {
        assert_eq!(lex_kw("_where"), Classification::NoMatch);
        assert_eq!(lex_kw("1"), Classification::NoMatch);
        assert_eq!(lex_kw(""), Classification::NoMatch);
    }
}
