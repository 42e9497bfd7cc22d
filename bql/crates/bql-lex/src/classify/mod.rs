//! Token classifiers.
//!
//! This module organizes the recognizers into small, focused components,
//! tried in this order by the token stream:
//! - `trivia` - single whitespace characters
//! - `operator` - arithmetic, comparison, and logical operators
//! - `keyword` - case-insensitive reserved words
//! - `identifier` - names
//! - `integer` - decimal integer literals
//!
//! A classifier either matches at the current position or reports
//! [`Classification::NoMatch`]. Callers go through [`attempt`], which
//! restores the cursor whenever a classifier does not match, so a failed
//! attempt never moves the cursor.

mod identifier;
mod integer;
mod keyword;
mod operator;
mod trivia;

pub use identifier::Identifier;
pub use integer::IntegerLiteral;
pub use keyword::Keyword;
pub use operator::Operator;
pub use trivia::Trivia;

use crate::cursor::Cursor;
use crate::token::TokenKind;

/// Outcome of one classifier attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The classifier does not recognize the input here.
    NoMatch,
    /// The classifier consumed `consumed` characters forming a token.
    Matched {
        /// Category of the token.
        kind: TokenKind,
        /// Matched text; empty for trivia and operators.
        lexeme: String,
        /// Characters consumed.
        consumed: usize,
    },
}

/// A recognizer for one token category.
pub trait Classifier {
    /// Short name used in trace output.
    fn name(&self) -> &'static str;

    /// Tries to match a token at the cursor's position.
    ///
    /// Implementations should leave the cursor where it was when they
    /// return [`Classification::NoMatch`]; [`attempt`] enforces it.
    fn classify(&self, cursor: &mut Cursor) -> Classification;
}

/// The classifiers in priority order. The first match wins.
pub static CHAIN: [&(dyn Classifier + Sync); 5] =
    [&Trivia, &Operator, &Keyword, &Identifier, &IntegerLiteral];

/// Runs `classifier`, restoring the cursor if it does not match.
pub fn attempt(classifier: &dyn Classifier, cursor: &mut Cursor) -> Classification {
    let snapshot = cursor.snapshot();
    let result = classifier.classify(cursor);
    if result == Classification::NoMatch {
        debug_assert_eq!(
            cursor.offset(),
            snapshot.offset(),
            "{} classifier moved the cursor without matching",
            classifier.name()
        );
        cursor.restore(snapshot);
    }
    result
}

/// Consumes characters on the current line while `pred` holds, appending
/// them to `lexeme`. Returns the number consumed.
fn take_while_in_line(cursor: &mut Cursor, lexeme: &mut String, pred: fn(char) -> bool) -> usize {
    let mut count = 0;
    while let Some(c) = cursor.peek_in_line().filter(|&c| pred(c)) {
        cursor.read();
        lexeme.push(c);
        count += 1;
    }
    count
}

/// Reads a run that starts with a character satisfying `first` and
/// continues, on the same line, with characters satisfying `rest`.
fn munch_run(
    cursor: &mut Cursor,
    first: fn(char) -> bool,
    rest: fn(char) -> bool,
) -> Option<(String, usize)> {
    let start = cursor.peek().filter(|&c| first(c))?;
    cursor.read();
    let mut lexeme = String::from(start);
    let consumed = 1 + take_while_in_line(cursor, &mut lexeme, rest);
    Some((lexeme, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::LineTerminator;

    /// Misbehaving classifier: reads a character and then gives up.
    struct Greedy;

    impl Classifier for Greedy {
        fn name(&self) -> &'static str {
            "greedy"
        }

        fn classify(&self, cursor: &mut Cursor) -> Classification {
            cursor.read();
            Classification::NoMatch
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_attempt_restores_after_no_match() {
        let mut cursor = Cursor::with_terminator("abc", LineTerminator::Lf);
        assert_eq!(attempt(&Greedy, &mut cursor), Classification::NoMatch);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "greedy classifier moved the cursor")]
    fn test_attempt_flags_leaky_classifier() {
        let mut cursor = Cursor::with_terminator("abc", LineTerminator::Lf);
        attempt(&Greedy, &mut cursor);
    }

    #[test]
    fn test_chain_order() {
        let names: Vec<_> = CHAIN.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["trivia", "operator", "keyword", "identifier", "integer"]);
    }

    #[test]
    fn test_munch_run_stays_on_line() {
        let mut cursor = Cursor::with_terminator("ab\ncd", LineTerminator::Lf);
        let run = munch_run(&mut cursor, char::is_alphabetic, char::is_alphabetic);
        assert_eq!(run, Some(("ab".to_string(), 2)));
        assert_eq!(cursor.peek(), Some('c'));
    }

    #[test]
    fn test_munch_run_needs_first_char() {
        let mut cursor = Cursor::with_terminator("1a", LineTerminator::Lf);
        assert_eq!(munch_run(&mut cursor, char::is_alphabetic, char::is_alphabetic), None);
        assert_eq!(cursor.offset(), 0);
    }
}
