//! Base character-class parsers.

use crate::combinator::{join, many0};
use crate::parser::{Parser, any_of};

/// Matches a single space, tab, or carriage return (not a newline).
pub fn space<'a>() -> impl Parser<'a, Output = char> + 'a {
    any_of(" \t\r")
}

/// Matches a single space, newline, tab, or carriage return.
pub fn whitespace<'a>() -> impl Parser<'a, Output = char> + 'a {
    any_of(" \n\t\r")
}

/// Matches zero or more [`space`] characters as one string. Never fails.
pub fn optional_space<'a>() -> impl Parser<'a, Output = String> + 'a {
    join(many0(space()))
}

/// Matches zero or more [`whitespace`] characters as one string. Never
/// fails. The default padding for the `pad_*` combinators.
pub fn optional_whitespace<'a>() -> impl Parser<'a, Output = String> + 'a {
    join(many0(whitespace()))
}
