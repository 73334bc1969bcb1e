#![forbid(missing_docs)]
//! # `readr`
//! The `readr` crate provides a cursor over an in-memory buffer of code units. It is the scanning
//! primitive underneath hand-written lexers and recursive-descent parsers: the parser asks the
//! cursor one question at a time ("does the input continue with X?") and the cursor consumes the
//! input only if the answer is yes.
//!
//! The cursor offers
//! - lookahead and single unit consumption ([Cursor::peek], [Cursor::read], [Cursor::eof]),
//! - greedy runs over unit sets and predicates ([Cursor::consume], [Cursor::consume_while],
//!   [Cursor::match_while]),
//! - literal and anchored pattern matching ([Cursor::match_unit], [Cursor::match_literal],
//!   [Cursor::match_pattern], [Cursor::match_any]),
//! - a checkpoint stack for backtracking ([Cursor::push_state], [Cursor::pop_state],
//!   [Cursor::restore_state]) and its scoped form [Cursor::speculate],
//! - line and column diagnostics ([Cursor::location], [Cursor::location_at]).
//!
//! Patterns are anchored: a pattern only matches if it matches exactly at the cursor offset. The
//! crate ships three pattern back-ends, [Literal], [CharClass] (parsed with `regex-syntax`) and
//! [Regex] (built on the meta engine of `regex-automata`). Other engines can be plugged in by
//! implementing [Pattern].
//!
//! # Example
//! ```rust
//! use readr::{Reader, Regex};
//!
//! const INPUT: &str = "int main() { return 42; }";
//!
//! fn main() {
//!     let identifier = Regex::new(r"[_a-zA-Z$][_a-zA-Z0-9]*").expect("Regex error");
//!     let number = Regex::new(r"0|[1-9][0-9]*").expect("Regex error");
//!
//!     let mut reader = Reader::from(INPUT);
//!     let mut tokens = Vec::new();
//!     loop {
//!         reader.consume(" \t\n");
//!         if reader.eof() {
//!             break;
//!         }
//!         if let Some(m) = reader
//!             .match_pattern(&identifier)
//!             .or_else(|| reader.match_pattern(&number))
//!         {
//!             tokens.push(m.to_string());
//!         } else {
//!             let location = reader.location();
//!             match reader.read() {
//!                 c @ (b'(' | b')' | b'{' | b'}' | b';') => tokens.push((c as char).to_string()),
//!                 c => panic!("Unexpected '{}' at {}", c as char, location),
//!             }
//!         }
//!     }
//!     assert_eq!(tokens, ["int", "main", "(", ")", "{", "return", "42", ";", "}"]);
//! }
//! ```
//!
//! # Crate features
//! - `serde`: enabled by default. Derives `Serialize` and `Deserialize` for [Span] and
//!   [Location].

/// Module with the character class pattern
mod char_class;
pub use char_class::CharClass;

/// Module with the checkpoint stack and the speculation guard
mod checkpoint;
pub use checkpoint::Speculation;

/// The module with the cursor.
mod cursor;
pub use cursor::{Cursor, Reader};

/// Module with error definitions
mod errors;
pub use errors::{ReadrError, ReadrErrorKind, Result};

/// The module with internal implementation details.
mod internal;

/// Module that provides a location type
mod location;
pub use location::Location;

/// Module that provides a Match type
mod match_type;
pub use match_type::Match;

/// Module that provides the Pattern trait and the Literal pattern
mod pattern;
pub use pattern::{Literal, Pattern};

/// Module with the regular expression pattern
mod regex_pattern;
pub use regex_pattern::{Regex, RegexBuilder};

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module with the code unit abstraction
mod unit;
pub use unit::{Unit, UnitSet};
