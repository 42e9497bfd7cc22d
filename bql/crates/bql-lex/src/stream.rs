//! Token stream with single-token pushback.
//!
//! [`TokenStream`] drives the classifier chain over a [`Cursor`] and hands
//! tokens to a parser one at a time. Every call to [`TokenStream::get`]
//! records where it started, whatever its outcome, so exactly one
//! [`TokenStream::unget`] can undo it.

use tracing::{debug, trace};

use crate::classify::{attempt, Classification, CHAIN};
use crate::cursor::{Cursor, CursorSnapshot, LineTerminator};
use crate::error::{LexError, LexResult, UngetError};
use crate::token::Token;

/// Options controlling how the source is scanned.
///
/// # Example
///
/// ```
/// use bql_lex::{LexOptions, LineTerminator, TokenKind, TokenStream};
///
/// let options = LexOptions::new()
///     .line_terminator(LineTerminator::Lf)
///     .skip_trivia(true);
/// let stream = TokenStream::with_options("x = 1", options);
/// let kinds: Vec<_> = stream.map(|t| t.unwrap().kind()).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Assignment, TokenKind::IntegerLiteral]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Terminator the source is split on.
    pub line_terminator: LineTerminator,

    /// Whether `get` silently passes over whitespace tokens.
    pub skip_trivia: bool,
}

impl LexOptions {
    /// Default options: platform line terminator, trivia kept.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    pub fn line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    /// Sets whether whitespace tokens are skipped.
    pub fn skip_trivia(mut self, skip: bool) -> Self {
        self.skip_trivia = skip;
        self
    }
}

/// What the last `get` consumed.
#[derive(Clone, Copy, Debug)]
struct Pushback {
    start: CursorSnapshot,
    span: usize,
}

/// A stream of tokens over an in-memory source.
///
/// # Example
///
/// ```
/// use bql_lex::{TokenKind, TokenStream};
///
/// let mut stream = TokenStream::new("VAR x");
/// assert_eq!(stream.peek().unwrap().unwrap().kind(), TokenKind::Var);
/// assert_eq!(stream.get().unwrap().unwrap().kind(), TokenKind::Var);
/// stream.unget().unwrap();
/// assert_eq!(stream.get().unwrap().unwrap().kind(), TokenKind::Var);
/// ```
#[derive(Clone, Debug)]
pub struct TokenStream {
    /// Character cursor for source traversal.
    cursor: Cursor,

    options: LexOptions,

    /// Undo record for the most recent `get`, consumed by `unget`.
    pushback: Option<Pushback>,

    /// Set once the iterator has yielded an error.
    fused: bool,
}

impl TokenStream {
    /// Creates a stream over `source`, split on the platform line terminator.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    /// Creates a stream over `source` with explicit options.
    pub fn with_options(source: &str, options: LexOptions) -> Self {
        Self {
            cursor: Cursor::with_terminator(source, options.line_terminator),
            options,
            pushback: None,
            fused: false,
        }
    }

    /// Consumes and returns the next token.
    ///
    /// # Returns
    /// * `Ok(Some(token))` - the next token
    /// * `Ok(None)` - end of input
    /// * `Err(LexError)` - the next character starts no token; nothing is
    ///   consumed, so calling `get` again reports the same error
    pub fn get(&mut self) -> LexResult<Option<Token>> {
        let start = self.cursor.snapshot();
        let outcome = self.scan();
        if outcome.is_err() {
            self.cursor.restore(start);
        }
        self.pushback = Some(Pushback {
            start,
            span: self.cursor.consumed_since(&start),
        });
        outcome
    }

    /// Returns what `get` would return without consuming anything.
    ///
    /// The pushback record of the previous `get` is left intact, so
    /// `get`, `peek`, `unget` still undoes the `get`.
    pub fn peek(&mut self) -> LexResult<Option<Token>> {
        let start = self.cursor.snapshot();
        let outcome = self.scan();
        self.cursor.restore(start);
        outcome
    }

    /// Pushes back the outcome of the most recent `get`.
    ///
    /// Only one level of pushback exists: a second `unget` without an
    /// intervening `get` is rejected.
    pub fn unget(&mut self) -> Result<(), UngetError> {
        match self.pushback.take() {
            Some(pushback) => {
                trace!(span = pushback.span, "unget");
                self.cursor.restore(pushback.start);
                self.fused = false;
                Ok(())
            },
            None => {
                debug!("unget rejected: no token to push back");
                Err(UngetError::NothingToUnget)
            },
        }
    }

    /// Characters consumed by the most recent `get`, 0 if none.
    pub fn last_span(&self) -> usize {
        self.pushback.map_or(0, |pushback| pushback.span)
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// The options this stream was created with.
    pub fn options(&self) -> LexOptions {
        self.options
    }

    /// Produces the next token, honoring `skip_trivia`.
    fn scan(&mut self) -> LexResult<Option<Token>> {
        loop {
            match self.classify_next()? {
                Some(token) if self.options.skip_trivia && token.kind().is_trivia() => continue,
                next => return Ok(next),
            }
        }
    }

    /// Runs the classifier chain once at the cursor.
    fn classify_next(&mut self) -> LexResult<Option<Token>> {
        let Some(location) = self.cursor.next_location() else {
            return Ok(None);
        };

        for classifier in CHAIN {
            if let Classification::Matched { kind, lexeme, consumed } =
                attempt(classifier, &mut self.cursor)
            {
                trace!(classifier = classifier.name(), ?kind, consumed, line = location.line, "matched");
                return Ok(Some(Token::new(kind, lexeme, location.line)));
            }
        }

        let ch = self.cursor.peek().unwrap_or_default();
        let err = LexError::UnexpectedChar {
            line: location.line,
            column: location.column,
            ch,
        };
        debug!(%err, "no classifier matched");
        Err(err)
    }
}

impl Iterator for TokenStream {
    type Item = LexResult<Token>;

    /// Yields tokens until end of input. After an error is yielded the
    /// iterator is fused until the next `unget`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.fused {
            return None;
        }
        match self.get() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => None,
            Err(err) => {
                self.fused = true;
                Some(Err(err))
            },
        }
    }
}

/// Lexes `source` (platform line terminator) into a token list.
///
/// # Example
///
/// ```
/// use bql_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("a==b").unwrap();
/// assert_eq!(tokens[1].kind(), TokenKind::EqualTo);
/// assert!(tokenize("a & b").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    tokenize_with(source, LexOptions::default())
}

/// Lexes `source` with explicit options, stopping at the first error.
pub fn tokenize_with(source: &str, options: LexOptions) -> LexResult<Vec<Token>> {
    TokenStream::with_options(source, options).collect()
}
