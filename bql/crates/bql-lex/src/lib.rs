//! bql-lex - Lexical Scanner for the BabylonDB Query Language
//!
//! This crate turns query source text into a stream of classified tokens
//! for the query parser. Scanning is single-threaded and works on a source
//! that is fully in memory.
//!
//! # Example Usage
//!
//! ```
//! use bql_lex::{TokenKind, TokenStream};
//!
//! let mut stream = TokenStream::new("VAR x = 10");
//!
//! assert_eq!(stream.get().unwrap().unwrap().kind(), TokenKind::Var);
//!
//! // Look ahead without consuming
//! assert_eq!(stream.peek().unwrap().unwrap().kind(), TokenKind::Space);
//!
//! // Or iterate over what is left
//! for token in &mut stream {
//!     println!("{}", token.unwrap());
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Line-aware character cursor
//! - [`classify`] - Ordered token classifiers
//! - [`stream`] - Token stream with pushback
//! - [`token`] - Token type definitions
//! - [`error`] - Lexical error types
//! - [`unicode`] - Character classes
//!
//! # Token Categories
//!
//! **Keywords** (case-insensitive): `WHERE`, `VAR`, `SELECT`, `FIRST`,
//! `BETWEEN`, `MATCH`, `ORDER`
//!
//! **Identifiers**: `[letter _][letter digit _]*`
//!
//! **Integer literals**: `[0-9]+`
//!
//! **Operators**:
//! - Arithmetic: `=`, `+`, `-`, `*`, `/`, `%`
//! - Comparison: `==`, `!=`, `>`, `<`, `>=`, `<=`
//! - Logical: `!`, `&&`, `||`
//!
//! **Trivia**: one token per whitespace character
//!
//! No token spans two physical lines: line terminators end every run.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod stream;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use cursor::{Cursor, LineTerminator, Location};
pub use error::{LexError, LexResult, UngetError};
pub use stream::{tokenize, tokenize_with, LexOptions, TokenStream};
pub use token::{keyword_from_ident, Token, TokenKind};

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Token> {
        let options = LexOptions::new()
            .line_terminator(LineTerminator::Lf)
            .skip_trivia(true);
        tokenize_with(source, options).unwrap()
    }

    #[test]
    fn test_select_query() {
        let tokens = lex_all("SELECT FIRST 10 name WHERE age BETWEEN 18 AND 30");
        assert_eq!(tokens[0].kind(), TokenKind::Select);
        assert_eq!(tokens[1].kind(), TokenKind::First);
        assert_eq!(tokens[2].int_value(), Ok(10));
        assert_eq!(tokens[4].kind(), TokenKind::Where);
        assert_eq!(tokens[6].kind(), TokenKind::Between);
        // `AND` is not a keyword; logical and is spelled `&&`.
        assert_eq!(tokens[8].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_match_query() {
        let options = LexOptions::new().skip_trivia(true);
        let mut stream = TokenStream::with_options("MATCH (a)", options);
        assert_eq!(stream.get().unwrap().unwrap().kind(), TokenKind::Match);
        assert!(matches!(
            stream.get(),
            Err(LexError::UnexpectedChar { ch: '(', column: 7, .. })
        ));
    }

    #[test]
    fn test_multiline_var_block() {
        let source = "VAR total = price * qty\nVAR rest = total % 7\nSELECT rest";
        let tokens = lex_all(source);
        let vars: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Var)
            .map(Token::line)
            .collect();
        assert_eq!(vars, [1, 2]);
        assert_eq!(tokens.last().unwrap().line(), 3);
    }

    #[test]
    fn test_display_round_trip_text() {
        let source = "where a<=b||!c";
        let options = LexOptions::new().line_terminator(LineTerminator::Lf);
        let tokens = tokenize_with(source, options).unwrap();
        let text: String = tokens.iter().map(Token::text).collect();
        assert_eq!(text, source);
    }
}
