//! Repetition, choice, and structural combinators.
//!
//! Every constructor here takes parsers and/or raw match parameters and
//! returns a new parser; composition happens by function composition alone.
//! Backtracking is free: a combinator that must retry simply re-invokes a
//! child with the cursor it held before the attempt.

use crate::errors::ParseError;
use crate::input::Cursor;
use crate::parser::{BoxedParser, Parser};
use crate::whitespace::optional_whitespace;

/// Runs `parser`, turning failure into a `None` value over the original
/// cursor. Never fails.
pub fn optional<'a, P>(parser: P) -> impl Parser<'a, Output = Option<P::Output>> + 'a
where
    P: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| match parser.parse(cursor) {
        Ok((value, rest)) => Ok((Some(value), rest)),
        Err(_) => Ok((None, cursor)),
    }
}

/// Runs `parser` repeatedly until it fails, threading the cursor forward.
fn collect<'a, P>(parser: &P, mut cursor: Cursor<'a>) -> (Vec<P::Output>, Cursor<'a>)
where
    P: Parser<'a>,
{
    let mut values = Vec::new();

    while let Ok((value, rest)) = parser.parse(cursor) {
        values.push(value);
        cursor = rest;
    }

    (values, cursor)
}

/// Matches `parser` zero or more times, collecting the values in order.
/// Never fails; zero matches yield an empty list over the original cursor.
pub fn many0<'a, P>(parser: P) -> impl Parser<'a, Output = Vec<P::Output>> + 'a
where
    P: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| Ok(collect(&parser, cursor))
}

/// Matches `parser` one or more times. Zero matches fail over the original
/// cursor, discarding the child's more specific error.
pub fn many1<'a, P>(parser: P) -> impl Parser<'a, Output = Vec<P::Output>> + 'a
where
    P: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (values, rest) = collect(&parser, cursor);

        if values.is_empty() {
            Err(ParseError::new(cursor))
        } else {
            Ok((values, rest))
        }
    }
}

/// Tries each parser in order, every attempt starting from the original
/// cursor, and returns the first success.
///
/// Ordering is significant: earlier entries take precedence, which is the
/// only ambiguity-resolution mechanism in the algebra. When all fail, fails
/// over the original cursor.
pub fn either<'a, T: 'a>(parsers: Vec<BoxedParser<'a, T>>) -> impl Parser<'a, Output = T> + 'a {
    move |cursor: Cursor<'a>| {
        for parser in &parsers {
            if let Ok(success) = parser.parse(cursor) {
                return Ok(success);
            }
        }

        Err(ParseError::new(cursor))
    }
}

/// Runs each parser in order, threading the cursor forward, and collects the
/// values into a list matching input order. The first child failure
/// propagates unchanged.
pub fn sequentially<'a, T: 'a>(
    parsers: Vec<BoxedParser<'a, T>>,
) -> impl Parser<'a, Output = Vec<T>> + 'a {
    move |mut cursor: Cursor<'a>| {
        let mut values = Vec::with_capacity(parsers.len());

        for parser in &parsers {
            let (value, rest) = parser.parse(cursor)?;
            values.push(value);
            cursor = rest;
        }

        Ok((values, cursor))
    }
}

/// Matches `parser`, then zero or more `separator`-then-`parser` pairs, and
/// yields the (at least one) element values.
///
/// The first element's failure propagates unchanged, as does an element
/// failure after a matched separator; only a failed *separator* ends the
/// list.
pub fn list_of<'a, P, S>(parser: P, separator: S) -> impl Parser<'a, Output = Vec<P::Output>> + 'a
where
    P: Parser<'a> + 'a,
    S: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (first, mut rest) = parser.parse(cursor)?;
        let mut values = vec![first];

        while let Ok((_, after_separator)) = separator.parse(rest) {
            let (value, next) = parser.parse(after_separator)?;
            values.push(value);
            rest = next;
        }

        Ok((values, rest))
    }
}

/// As [`list_of`], but a missing first element yields an empty list and a
/// matched separator with no element after it ends the list (with the
/// separator consumed) instead of failing. Never fails.
pub fn optional_list_of<'a, P, S>(
    parser: P,
    separator: S,
) -> impl Parser<'a, Output = Vec<P::Output>> + 'a
where
    P: Parser<'a> + 'a,
    S: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (first, mut rest) = match parser.parse(cursor) {
            Ok(success) => success,
            Err(_) => return Ok((Vec::new(), cursor)),
        };
        let mut values = vec![first];

        while let Ok((_, after_separator)) = separator.parse(rest) {
            rest = after_separator;

            match parser.parse(rest) {
                Ok((value, next)) => {
                    values.push(value);
                    rest = next;
                }
                Err(_) => break,
            }
        }

        Ok((values, rest))
    }
}

/// Strips [`optional_whitespace`] before `parser`; the padding is discarded.
pub fn pad_left<'a, P>(parser: P) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
{
    pad_left_with(parser, optional_whitespace())
}

/// Strips `padding` before `parser`; the padding value is discarded.
pub fn pad_left_with<'a, P, Pad>(parser: P, padding: Pad) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
    Pad: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (_, rest) = padding.parse(cursor)?;
        parser.parse(rest)
    }
}

/// Strips [`optional_whitespace`] after `parser`; the padding is discarded.
pub fn pad_right<'a, P>(parser: P) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
{
    pad_right_with(parser, optional_whitespace())
}

/// Strips `padding` after `parser`; the padding value is discarded.
pub fn pad_right_with<'a, P, Pad>(
    parser: P,
    padding: Pad,
) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
    Pad: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (value, rest) = parser.parse(cursor)?;
        let (_, rest) = padding.parse(rest)?;
        Ok((value, rest))
    }
}

/// Strips [`optional_whitespace`] around `parser`; the padding is discarded.
pub fn pad_both<'a, P>(parser: P) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
{
    pad_both_with(parser, optional_whitespace())
}

/// Strips `padding` around `parser`; the padding values are discarded.
///
/// The padding parser runs twice, so it must be usable for both sides (any
/// parser in this crate is, by purity).
pub fn pad_both_with<'a, P, Pad>(parser: P, padding: Pad) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
    Pad: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (_, rest) = padding.parse(cursor)?;
        let (value, rest) = parser.parse(rest)?;
        let (_, rest) = padding.parse(rest)?;
        Ok((value, rest))
    }
}

/// Concatenates a parser's character-sequence output into a single string;
/// the usual way to turn repetition results into scalar text.
pub fn join<'a, P>(parser: P) -> impl Parser<'a, Output = String> + 'a
where
    P: Parser<'a> + 'a,
    P::Output: IntoIterator<Item = char>,
{
    move |cursor: Cursor<'a>| {
        let (value, rest) = parser.parse(cursor)?;
        Ok((value.into_iter().collect(), rest))
    }
}

/// Matches `left`, then `parser`, then `right`, in sequence, and yields only
/// `parser`'s value. Failures propagate from whichever sub-parser fails
/// first.
pub fn between<'a, P, L, R>(parser: P, left: L, right: R) -> impl Parser<'a, Output = P::Output> + 'a
where
    P: Parser<'a> + 'a,
    L: Parser<'a> + 'a,
    R: Parser<'a> + 'a,
{
    move |cursor: Cursor<'a>| {
        let (_, rest) = left.parse(cursor)?;
        let (value, rest) = parser.parse(rest)?;
        let (_, rest) = right.parse(rest)?;
        Ok((value, rest))
    }
}
