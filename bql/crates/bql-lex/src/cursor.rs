//! Character cursor for traversing query source.
//!
//! This module provides the `Cursor` struct which walks a source text that
//! has been split into physical lines up front. Line terminators are not part
//! of the character stream: reading past the last character of a line simply
//! continues on the next line that has characters. The cursor tracks
//! line/column information so tokens and errors can be attributed to a line.

/// Line terminator used to split the source into physical lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineTerminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineTerminator {
    /// Returns the terminator of the platform the crate was built for.
    pub const fn platform() -> Self {
        if cfg!(windows) {
            LineTerminator::CrLf
        } else {
            LineTerminator::Lf
        }
    }

    /// Returns the terminator text.
    pub const fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::CrLf => "\r\n",
        }
    }
}

impl Default for LineTerminator {
    fn default() -> Self {
        Self::platform()
    }
}

/// A 1-based line/column pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

/// A cursor over a line-split source.
///
/// The position is a `(line, column)` pair where `column` may equal the
/// length of the line: that is the position right after the line's last
/// character. At most one step is ever taken per `read`, so classifiers can
/// undo speculative reads with [`Cursor::unread`] or, more robustly, with a
/// [`CursorSnapshot`].
///
/// # Example
///
/// ```
/// use bql_lex::cursor::{Cursor, LineTerminator};
///
/// let mut cursor = Cursor::with_terminator("ab\ncd", LineTerminator::Lf);
/// assert_eq!(cursor.read(), Some('a'));
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.peek_in_line(), None);
/// assert_eq!(cursor.read(), Some('c'));
/// assert_eq!(cursor.line(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor {
    /// Physical lines, terminators stripped.
    lines: Vec<Vec<char>>,

    /// Character offset at which each line starts.
    line_starts: Vec<usize>,

    /// Current line index (0-based).
    line: usize,

    /// Current column index (0-based), `<= lines[line].len()`.
    column: usize,
}

impl Cursor {
    /// Creates a cursor over `source`, split on the platform line terminator.
    pub fn new(source: &str) -> Self {
        Self::with_terminator(source, LineTerminator::platform())
    }

    /// Creates a cursor over `source`, split on `terminator`.
    pub fn with_terminator(source: &str, terminator: LineTerminator) -> Self {
        let lines: Vec<Vec<char>> = source
            .split(terminator.as_str())
            .map(|line| line.chars().collect())
            .collect();

        let mut line_starts = Vec::with_capacity(lines.len());
        let mut start = 0;
        for line in &lines {
            line_starts.push(start);
            start += line.len();
        }

        Self {
            lines,
            line_starts,
            line: 0,
            column: 0,
        }
    }

    /// Position of the next unread character, skipping exhausted lines.
    fn next_position(&self) -> Option<(usize, usize)> {
        let mut line = self.line;
        let mut column = self.column;
        loop {
            if column < self.lines[line].len() {
                return Some((line, column));
            }
            if line + 1 >= self.lines.len() {
                return None;
            }
            line += 1;
            column = 0;
        }
    }

    /// Reads the next character and advances past it.
    ///
    /// Returns `None` once the input is exhausted; the cursor does not move
    /// in that case.
    pub fn read(&mut self) -> Option<char> {
        let (line, column) = self.next_position()?;
        self.line = line;
        self.column = column + 1;
        Some(self.lines[line][column])
    }

    /// Returns the next character without consuming it.
    ///
    /// ```
    /// use bql_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek(), Some('x'));
    /// assert_eq!(cursor.peek(), Some('x'));
    /// ```
    pub fn peek(&self) -> Option<char> {
        self.next_position()
            .map(|(line, column)| self.lines[line][column])
    }

    /// Returns the next character only if it sits on the current line.
    ///
    /// Multi-character tokens extend themselves through this method, which
    /// keeps every token on a single physical line.
    #[inline]
    pub fn peek_in_line(&self) -> Option<char> {
        self.lines[self.line].get(self.column).copied()
    }

    /// Moves back over the most recently read character.
    ///
    /// Unreading at the very start of the input is a caller bug.
    pub fn unread(&mut self) {
        while self.column == 0 {
            if self.line == 0 {
                debug_assert!(false, "unread past the start of the input");
                return;
            }
            self.line -= 1;
            self.column = self.lines[self.line].len();
        }
        self.column -= 1;
    }

    /// Calls [`Cursor::unread`] exactly `count` times.
    pub fn unread_span(&mut self, count: usize) {
        for _ in 0..count {
            self.unread();
        }
    }

    /// Returns true if no characters remain.
    pub fn is_at_end(&self) -> bool {
        self.next_position().is_none()
    }

    /// Location of the next unread character, or `None` at end of input.
    pub fn next_location(&self) -> Option<Location> {
        self.next_position().map(|(line, column)| Location {
            line: line as u32 + 1,
            column: column as u32 + 1,
        })
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line as u32 + 1
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column as u32 + 1
    }

    /// Number of physical lines in the source.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters read so far, terminators excluded.
    pub fn offset(&self) -> usize {
        self.line_starts[self.line] + self.column
    }

    /// Creates a snapshot of the current position.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            line: self.line,
            column: self.column,
            offset: self.offset(),
        }
    }

    /// Restores a position saved with [`Cursor::snapshot`].
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.line = snapshot.line;
        self.column = snapshot.column;
    }

    /// Characters consumed since `snapshot` was taken.
    pub fn consumed_since(&self, snapshot: &CursorSnapshot) -> usize {
        self.offset().saturating_sub(snapshot.offset)
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    line: usize,
    column: usize,
    offset: usize,
}

impl CursorSnapshot {
    /// Character offset of the saved position.
    pub fn offset(&self) -> usize {
        self.offset
    }
}
