//! The immutable input cursor and its line/column position.

use std::fmt;
use std::str::Chars;

use crate::errors::ParseError;

/// A 1-based line/column location in the source text.
///
/// Column resets to 1 and line increments exactly when the consumed
/// character is a newline; otherwise column increments by 1. Values are
/// derived, never mutated in place.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// The position reached after consuming `ch` at this position.
    fn after(self, ch: char) -> Position {
        if ch == '\n' {
            Position {
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, col {}", self.line, self.column)
    }
}

/// An immutable view over the remaining source text.
///
/// Advancing derives a fresh cursor and leaves the original untouched, so a
/// failed speculative parse is discarded by simply reusing the cursor it
/// started from. No rollback step exists because nothing is ever mutated.
///
/// Advancing is O(1) per character: the cursor keeps a byte index into the
/// original buffer plus the cached [`Position`], no text is copied.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over the full input, at `line 1, col 1`.
    pub fn new(source: &'a str) -> Self {
        Cursor {
            source,
            offset: 0,
            position: Position::START,
        }
    }

    /// The text not yet consumed.
    #[inline(always)]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// The line/column of the next character to be consumed.
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns true when no text remains.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.offset == self.source.len()
    }

    /// An iterator over the remaining characters.
    ///
    /// Iterating never moves the cursor itself; every call restarts from the
    /// current position.
    pub fn chars(&self) -> Chars<'a> {
        self.remaining().chars()
    }

    /// The next character, without consuming it.
    pub(crate) fn first(&self) -> Result<char, ParseError<'a>> {
        self.chars().next().ok_or(ParseError::new(*self))
    }

    /// Consumes a single character, deriving the successor cursor.
    ///
    /// Fails when the cursor is empty.
    pub fn advance(self) -> Result<Cursor<'a>, ParseError<'a>> {
        let ch = self.first()?;

        Ok(Cursor {
            source: self.source,
            offset: self.offset + ch.len_utf8(),
            position: self.position.after(ch),
        })
    }

    /// The next `n` characters, without consuming them.
    ///
    /// Fails when the cursor is empty or fewer than `n` characters remain.
    pub fn peek(&self, n: usize) -> Result<&'a str, ParseError<'a>> {
        if self.is_empty() {
            return Err(ParseError::new(*self));
        }

        let rest = self.remaining();
        let mut end = 0;
        let mut indices = rest.char_indices();

        for _ in 0..n {
            match indices.next() {
                Some((at, ch)) => end = at + ch.len_utf8(),
                None => return Err(ParseError::new(*self)),
            }
        }

        Ok(&rest[..end])
    }

    /// Consumes the next character when it equals `expected`,
    /// case-insensitively.
    ///
    /// The case-insensitivity is a deliberate, narrow exception used by the
    /// single-character matchers ([`any_of`](crate::any_of) and
    /// [`skip_if`](Cursor::skip_if)); multi-character matching via
    /// [`match_str`](Cursor::match_str) stays case-sensitive.
    ///
    /// On mismatch the error carries this cursor, not an advanced one.
    pub fn match_char(self, expected: char) -> Result<Cursor<'a>, ParseError<'a>> {
        let found = self.first()?;

        if found.to_lowercase().eq(expected.to_lowercase()) {
            self.advance()
        } else {
            Err(ParseError::new(self))
        }
    }

    /// Consumes `expected` character by character, case-sensitively.
    ///
    /// Fails at the first mismatch; the error's cursor reflects whatever was
    /// consumed up to that point.
    pub fn match_str(self, expected: &str) -> Result<Cursor<'a>, ParseError<'a>> {
        let mut cursor = self;

        for ch in expected.chars() {
            match cursor.first() {
                Ok(found) if found == ch => cursor = cursor.advance()?,
                _ => return Err(ParseError::new(cursor)),
            }
        }

        Ok(cursor)
    }

    /// Consumes the next character when it equals `expected` (via
    /// [`match_char`](Cursor::match_char)); otherwise returns this cursor
    /// unchanged. Never fails.
    pub fn skip_if(self, expected: char) -> Cursor<'a> {
        self.match_char(expected).unwrap_or(self)
    }
}

/// Cursors are plain values: two are equal iff their remaining text and
/// position are equal, regardless of the buffers they index into.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining() == other.remaining() && self.position == other.position
    }
}

impl Eq for Cursor<'_> {}
