//! The single failure type shared by every parser in the crate.

use crate::input::Cursor;

/// A parse failure at a position.
///
/// Carries the cursor where the failure was detected, which may differ from
/// the cursor the failing parser started from when input was consumed before
/// the mismatch. The rendered message embeds that cursor's line/column and
/// is part of the public contract; consumers may pattern-match on it.
#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Syntax error at {}", .remaining.position())]
pub struct ParseError<'a> {
    /// The cursor at the point of failure.
    pub remaining: Cursor<'a>,
}

impl<'a> ParseError<'a> {
    pub fn new(remaining: Cursor<'a>) -> Self {
        ParseError { remaining }
    }
}

/// `Result` type returned by every parser: the matched value paired with the
/// cursor positioned after it, or a [`ParseError`].
pub type Result<'a, T> = std::result::Result<(T, Cursor<'a>), ParseError<'a>>;
