//! A small recursive-descent parser combinator toolkit built around an
//! immutable, position-tracking input cursor.
//!
//! A parser is any `Fn(Cursor) -> Result<(value, Cursor)>`; combinators are
//! plain functions that compose parsers into bigger parsers. The cursor is a
//! `Copy` value, so backtracking is just re-parsing from a cursor held
//! before the failed attempt.
//!
//! ```
//! use pakon::{Cursor, Parser, between, list_of, literal, pad_both};
//!
//! let item = pad_both(literal("spam"));
//! let list = between(list_of(item, literal(",")), literal("["), literal("]"));
//!
//! let (values, rest) = list.parse(Cursor::new("[spam, spam ,spam]")).unwrap();
//! assert_eq!(values, vec!["spam", "spam", "spam"]);
//! assert!(rest.is_empty());
//! ```

pub mod combinator;
pub mod errors;
pub mod input;
pub mod parser;
pub mod whitespace;

pub use combinator::*;
pub use errors::*;
pub use input::*;
pub use parser::*;
pub use whitespace::*;
