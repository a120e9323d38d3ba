//! The `Parser` trait and the elementary matchers.

use crate::combinator::{join, many1};
use crate::errors::{ParseError, Result};
use crate::input::Cursor;

/// A composable recursive-descent parser.
///
/// Implementations must be pure: parsing the same cursor value twice yields
/// the same result. Combinators rely on this to invoke a parser
/// speculatively and discard the outcome, retrying later from a previously
/// held cursor.
pub trait Parser<'a> {
    /// Output data type.
    type Output;

    /// Parses from `cursor`, returning the matched value and the cursor
    /// positioned after it.
    fn parse(&self, cursor: Cursor<'a>) -> Result<'a, Self::Output>;
}

/// Every `Fn(Cursor) -> Result` is a parser, so plain functions and closures
/// compose without any wrapping.
impl<'a, F, T> Parser<'a> for F
where
    F: Fn(Cursor<'a>) -> Result<'a, T>,
{
    type Output = T;

    #[inline(always)]
    fn parse(&self, cursor: Cursor<'a>) -> Result<'a, T> {
        self(cursor)
    }
}

/// A type-erased parser, for the list-taking combinators
/// ([`either`](crate::either), [`sequentially`](crate::sequentially),
/// [`case`]) whose branches have distinct concrete types.
pub type BoxedParser<'a, T> = Box<dyn Parser<'a, Output = T> + 'a>;

impl<'a, T> Parser<'a> for BoxedParser<'a, T> {
    type Output = T;

    #[inline(always)]
    fn parse(&self, cursor: Cursor<'a>) -> Result<'a, T> {
        (**self).parse(cursor)
    }
}

/// An extension trait adding combination methods to any [`Parser`].
pub trait ParserExt<'a>: Parser<'a> + Sized {
    /// On success, converts the output with `f`.
    fn map<F, O>(self, f: F) -> impl Parser<'a, Output = O> + 'a
    where
        Self: 'a,
        F: 'a + Fn(Self::Output) -> O,
    {
        move |cursor: Cursor<'a>| {
            let (value, rest) = self.parse(cursor)?;
            Ok((f(value), rest))
        }
    }

    /// Converts failure into a `None` value; method form of
    /// [`optional`](crate::optional).
    fn ok(self) -> impl Parser<'a, Output = Option<Self::Output>> + 'a
    where
        Self: 'a,
    {
        crate::combinator::optional(self)
    }

    /// Tries `other` from the same starting cursor when this parser fails;
    /// binary method form of [`either`](crate::either).
    fn or<R>(self, other: R) -> impl Parser<'a, Output = Self::Output> + 'a
    where
        Self: 'a,
        R: 'a + Parser<'a, Output = Self::Output>,
    {
        move |cursor: Cursor<'a>| self.parse(cursor).or_else(|_| other.parse(cursor))
    }

    /// Erases this parser's concrete type.
    fn boxed(self) -> BoxedParser<'a, Self::Output>
    where
        Self: 'a,
    {
        Box::new(self)
    }
}

impl<'a, P> ParserExt<'a> for P where P: Parser<'a> {}

/// Matches `string` verbatim, case-sensitively, and yields it as the value.
pub fn literal<'a>(string: &'a str) -> impl Parser<'a, Output = &'a str> + 'a {
    move |cursor: Cursor<'a>| {
        let rest = cursor.match_str(string)?;
        Ok((string, rest))
    }
}

/// Matches any one character of `charset`, tried in order, and yields the
/// charset character that matched.
///
/// Comparison goes through the case-insensitive single-character primitive;
/// see [`Cursor::match_char`]. Fails over the original cursor when none
/// match.
pub fn any_of<'a>(charset: &'a str) -> impl Parser<'a, Output = char> + 'a {
    move |cursor: Cursor<'a>| {
        for ch in charset.chars() {
            if let Ok(rest) = cursor.match_char(ch) {
                return Ok((ch, rest));
            }
        }

        Err(ParseError::new(cursor))
    }
}

/// Matches any one character *not* in `charset` (case-sensitively) and
/// consumes it.
pub fn any_but<'a>(charset: &'a str) -> impl Parser<'a, Output = char> + 'a {
    move |cursor: Cursor<'a>| {
        let found = cursor.first()?;

        if charset.contains(found) {
            Err(ParseError::new(cursor))
        } else {
            Ok((found, cursor.advance()?))
        }
    }
}

/// Matches one or more characters up to (excluding) the first member of
/// `charset`, concatenated into a single string.
///
/// Fails, over the original cursor, when zero characters can be consumed;
/// consumes to the end of input when no member is ever found. Same
/// semantics as `join(many1(any_but(charset)))`.
pub fn match_until<'a>(charset: &'a str) -> impl Parser<'a, Output = String> + 'a {
    join(many1(any_but(charset)))
}

/// Look-ahead dispatch: picks a branch by peeking a fixed-length prefix
/// instead of trying every alternative.
///
/// For the first branch whose prefix equals the next `prefix.len()`
/// characters, delegates fully to its parser; no backtracking across
/// branches happens after that, so the delegate's failure is final. A branch
/// whose prefix cannot be peeked (insufficient input) is skipped like a
/// non-match. When no branch matches, fails over the original cursor.
///
/// Backtracking combinators can be slow if left unmanaged; prefer this over
/// [`either`](crate::either) when a bounded look-ahead can select the
/// branch.
pub fn case<'a, T: 'a>(
    branches: Vec<(&'a str, BoxedParser<'a, T>)>,
) -> impl Parser<'a, Output = T> + 'a {
    move |cursor: Cursor<'a>| {
        for (prefix, parser) in &branches {
            match cursor.peek(prefix.chars().count()) {
                Ok(peeked) if peeked == *prefix => return parser.parse(cursor),
                _ => continue,
            }
        }

        Err(ParseError::new(cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Position;

    #[test]
    fn test_literal() {
        let (value, rest) = literal("foo").parse(Cursor::new("foobar")).unwrap();

        assert_eq!(value, "foo");
        assert_eq!(rest.remaining(), "bar");
    }

    #[test]
    fn test_literal_fails_at_first_mismatch() {
        let err = literal("foobar").parse(Cursor::new("foofoo")).unwrap_err();

        assert_eq!(err.remaining.position(), Position { line: 1, column: 4 });
        assert_eq!(err.remaining.remaining(), "foo");
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        assert!(literal("foo").parse(Cursor::new("Foo")).is_err());
    }

    #[test]
    fn test_any_of() {
        let (value, rest) = any_of("ab").parse(Cursor::new("bc")).unwrap();

        assert_eq!(value, 'b');
        assert_eq!(rest.remaining(), "c");
    }

    #[test]
    fn test_any_of_yields_charset_character() {
        // the single-char primitive is case-insensitive; the value is the
        // charset's spelling, not the input's
        let (value, _) = any_of("ab").parse(Cursor::new("B")).unwrap();
        assert_eq!(value, 'b');
    }

    #[test]
    fn test_any_of_fails_over_original_cursor() {
        let cursor = Cursor::new("z");
        let err = any_of("ab").parse(cursor).unwrap_err();

        assert_eq!(err.remaining, cursor);
    }

    #[test]
    fn test_any_but() {
        let (value, rest) = any_but(".,").parse(Cursor::new("a.")).unwrap();

        assert_eq!(value, 'a');
        assert_eq!(rest.remaining(), ".");

        assert!(any_but(".,").parse(Cursor::new(".a")).is_err());
        assert!(any_but(".,").parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_match_until() {
        let (value, rest) = match_until(".").parse(Cursor::new("abcde.")).unwrap();

        assert_eq!(value, "abcde");
        assert_eq!(rest.remaining(), ".");
    }

    #[test]
    fn test_match_until_consumes_to_end_without_member() {
        let (value, rest) = match_until(".").parse(Cursor::new("abc")).unwrap();

        assert_eq!(value, "abc");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_match_until_requires_one_character() {
        let cursor = Cursor::new(".abc");
        let err = match_until(".").parse(cursor).unwrap_err();

        assert_eq!(err.remaining, cursor);
    }

    #[test]
    fn test_case_dispatches_on_prefix() {
        let parser = case(vec![
            ("ab", literal("abc").boxed()),
            ("a", literal("axe").boxed()),
        ]);

        let (value, _) = parser.parse(Cursor::new("abc")).unwrap();
        assert_eq!(value, "abc");

        let (value, _) = parser.parse(Cursor::new("axe")).unwrap();
        assert_eq!(value, "axe");
    }

    #[test]
    fn test_case_commits_to_first_matching_branch() {
        let parser = case(vec![
            ("a", literal("axe").boxed()),
            ("ab", literal("abc").boxed()),
        ]);

        // "a" matched first and delegated; the delegate's failure is final
        // even though the second branch would have succeeded.
        assert!(parser.parse(Cursor::new("abc")).is_err());
    }

    #[test]
    fn test_case_skips_branches_longer_than_input() {
        let parser = case(vec![
            ("abc", literal("abcdef").boxed()),
            ("a", literal("ab").boxed()),
        ]);

        let (value, _) = parser.parse(Cursor::new("ab")).unwrap();
        assert_eq!(value, "ab");
    }

    #[test]
    fn test_case_empty_prefix_is_catch_all() {
        // peeking zero characters succeeds on any non-empty input, so an
        // empty prefix serves as a final fallback branch; it still commits,
        // and still fails on empty input
        let parser = case(vec![
            ("a", literal("axe").boxed()),
            ("", literal("zig").boxed()),
        ]);

        assert_eq!(parser.parse(Cursor::new("zig")).unwrap().0, "zig");
        assert!(parser.parse(Cursor::new("zag")).is_err());
        assert!(parser.parse(Cursor::new("")).is_err());
    }

    #[test]
    fn test_case_without_match_fails_over_original_cursor() {
        let cursor = Cursor::new("zzz");
        let parser = case(vec![("a", literal("a").boxed())]);

        assert_eq!(parser.parse(cursor).unwrap_err().remaining, cursor);
    }

    #[test]
    fn test_map() {
        let parser = literal("42").map(|s| s.parse::<i32>().unwrap());
        let (value, _) = parser.parse(Cursor::new("42!")).unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn test_ok() {
        let parser = literal("a").ok();

        assert_eq!(parser.parse(Cursor::new("ab")).unwrap().0, Some("a"));
        assert_eq!(parser.parse(Cursor::new("xy")).unwrap().0, None);
    }

    #[test]
    fn test_or() {
        let parser = literal("true").or(literal("false"));

        assert_eq!(parser.parse(Cursor::new("true")).unwrap().0, "true");
        assert_eq!(parser.parse(Cursor::new("false")).unwrap().0, "false");
        assert!(parser.parse(Cursor::new("maybe")).is_err());
    }

    #[test]
    fn test_parsers_are_pure() {
        let cursor = Cursor::new("aab");
        let parser = literal("a").or(literal("b"));

        assert_eq!(parser.parse(cursor), parser.parse(cursor));
    }
}
