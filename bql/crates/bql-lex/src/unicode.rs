//! Character classes used by the classifiers.
//!
//! Classification is deliberately basic: Unicode letters and whitespace are
//! recognized through the standard library, digits are ASCII only so every
//! integer literal can be parsed without further checks.

/// Checks if a character may start an identifier.
///
/// # Example
///
/// ```
/// use bql_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('é'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use bql_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('='));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || is_digit(c)
}

/// Checks if a character may appear in a keyword.
pub fn is_keyword_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character is a decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is trivia.
pub fn is_trivia(c: char) -> bool {
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_start() {
        assert!(is_ident_start('Z'));
        assert!(is_ident_start('_'));
        assert!(!is_ident_start('0'));
        assert!(!is_ident_start(' '));
    }

    #[test]
    fn test_ident_continue() {
        assert!(is_ident_continue('0'));
        assert!(is_ident_continue('x'));
        assert!(!is_ident_continue('&'));
    }

    #[test]
    fn test_keyword_chars_exclude_digits_and_underscore() {
        assert!(is_keyword_char('w'));
        assert!(!is_keyword_char('_'));
        assert!(!is_keyword_char('1'));
    }

    #[test]
    fn test_digits_are_ascii() {
        assert!(is_digit('7'));
        assert!(!is_digit('٣')); // Arabic-Indic three
    }

    #[test]
    fn test_trivia() {
        assert!(is_trivia(' '));
        assert!(is_trivia('\t'));
        assert!(is_trivia('\r'));
        assert!(!is_trivia('a'));
    }
}
