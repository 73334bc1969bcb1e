use log::trace;

use crate::{Location, Match, Pattern, Span, Unit, UnitSet};

/// A cursor over a borrowed buffer of code units.
///
/// The cursor keeps an offset into the buffer and a stack of checkpoints for backtracking. All
/// matching operations are atomic: they either consume the complete match and advance the offset,
/// or they leave the offset untouched.
///
/// * `'a` represents the lifetime of the input buffer.
/// * `U` is the code unit type, see [Unit].
///
/// ```rust
/// use readr::{Reader, Regex};
///
/// let identifier = Regex::new(r"[_a-zA-Z$][_a-zA-Z0-9]*").unwrap();
/// let mut reader = Reader::from("let answer = 42;");
/// assert_eq!(reader.match_pattern(&identifier).unwrap(), "let");
/// reader.consume_whitespace();
/// assert_eq!(reader.match_pattern(&identifier).unwrap(), "answer");
/// assert_eq!(reader.index(), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cursor<'a, U> {
    input: &'a [U],
    offset: usize,
    pub(crate) checkpoints: Vec<usize>,
}

/// A cursor over the bytes of a string.
pub type Reader<'a> = Cursor<'a, u8>;

impl<'a, U: Unit> Cursor<'a, U> {
    /// Creates a new cursor at the start of the input.
    pub fn new(input: &'a [U]) -> Self {
        Self::with_offset(input, 0)
    }

    /// Creates a new cursor at the given offset.
    ///
    /// # Panics
    /// Panics if the offset lies beyond the end of the input.
    pub fn with_offset(input: &'a [U], offset: usize) -> Self {
        assert!(
            offset <= input.len(),
            "offset {} is beyond the end of the input of length {}",
            offset,
            input.len()
        );
        Self {
            input,
            offset,
            checkpoints: Vec::new(),
        }
    }

    /// The complete input buffer.
    #[inline]
    pub fn input(&self) -> &'a [U] {
        self.input
    }

    /// The unconsumed rest of the input.
    #[inline]
    pub fn remaining(&self) -> &'a [U] {
        &self.input[self.offset..]
    }

    /// The length of the input buffer in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Check if the input buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Returns true if the cursor is at the end of the input.
    #[inline]
    pub fn eof(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Returns the current offset in code units.
    #[inline]
    pub fn index(&self) -> usize {
        self.offset
    }

    // Moves the cursor to a previously saved offset.
    #[inline]
    pub(crate) fn reset_to(&mut self, offset: usize) {
        debug_assert!(offset <= self.input.len());
        self.offset = offset;
    }

    /// Returns the unit at the current offset without advancing.
    /// At the end of the input [Unit::NUL] is returned.
    #[inline]
    pub fn peek(&self) -> U {
        self.input.get(self.offset).copied().unwrap_or(U::NUL)
    }

    /// Returns the unit at the current offset and advances by one.
    /// At the end of the input [Unit::NUL] is returned and the offset stays where it is.
    #[inline]
    pub fn read(&mut self) -> U {
        let unit = self.peek();
        if !self.eof() {
            self.offset += 1;
        }
        unit
    }

    /// Consumes the longest run of units that are members of `set` and returns its length.
    pub fn consume<S: UnitSet<U> + ?Sized>(&mut self, set: &S) -> usize {
        self.consume_while(|u| set.contains_unit(u))
    }

    /// Consumes spaces and tabs and returns the number of consumed units.
    /// Line feeds are not consumed, they are left to the grammar.
    pub fn consume_whitespace(&mut self) -> usize {
        self.consume(&[U::SPACE, U::TAB])
    }

    /// Consumes the longest run of units that satisfy `pred` and returns its length.
    pub fn consume_while<F: FnMut(U) -> bool>(&mut self, mut pred: F) -> usize {
        let count = self.remaining().iter().take_while(|&&u| pred(u)).count();
        self.offset += count;
        count
    }

    /// Like [Cursor::consume_while] but returns the consumed units.
    /// Returns `None` if no unit satisfies `pred`.
    pub fn match_while<F: FnMut(U) -> bool>(&mut self, pred: F) -> Option<Match<'a, U>> {
        let start = self.offset;
        match self.consume_while(pred) {
            0 => None,
            _ => Some(Match::new(self.input, Span::new(start, self.offset))),
        }
    }

    /// Advances by one and returns true if the unit at the current offset equals `unit`.
    pub fn match_unit(&mut self, unit: U) -> bool {
        if self.eof() || self.peek() != unit {
            return false;
        }
        self.offset += 1;
        true
    }

    /// Advances past `literal` and returns true if the input continues with it.
    /// The offset is left unchanged if the input does not continue with the complete literal.
    pub fn match_literal<L: AsRef<[U]>>(&mut self, literal: L) -> bool {
        let literal = literal.as_ref();
        if !self.remaining().starts_with(literal) {
            return false;
        }
        self.offset += literal.len();
        true
    }

    /// Matches `pattern` anchored at the current offset and advances past the match.
    ///
    /// The pattern must start matching exactly at the current offset. A pattern that occurs later
    /// in the input does not match.
    pub fn match_pattern<P: Pattern<U> + ?Sized>(&mut self, pattern: &P) -> Option<Match<'a, U>> {
        let start = self.offset;
        let len = pattern.match_at(self.input, start)?;
        let end = start.checked_add(len).filter(|&end| end <= self.input.len());
        debug_assert!(
            end.is_some(),
            "pattern reported a match of length {} at offset {} beyond the input end {}",
            len,
            start,
            self.input.len()
        );
        let end = end?;
        trace!("Pattern matched span {}..{}", start, end);
        self.offset = end;
        Some(Match::new(self.input, Span::new(start, end)))
    }

    /// Consumes the rest of the input.
    /// Returns `None` if the cursor already is at the end of the input.
    pub fn match_any(&mut self) -> Option<Match<'a, U>> {
        if self.eof() {
            return None;
        }
        let start = self.offset;
        self.offset = self.input.len();
        Some(Match::new(self.input, Span::new(start, self.offset)))
    }

    /// Returns the line and column of the current offset.
    pub fn location(&self) -> Location {
        self.location_at(self.offset)
    }

    /// Returns the line and column of the given offset.
    ///
    /// The location is computed by counting line feeds from the start of the input, so the costs
    /// are linear in `offset`. Offsets at or beyond the end of the input yield line 1, column 1.
    pub fn location_at(&self, offset: usize) -> Location {
        if offset >= self.input.len() {
            return Location::default();
        }
        let (line, column) = self.input[..offset]
            .iter()
            .fold((1, 1), |(line, column), &u| {
                if u == U::LINE_FEED {
                    (line + 1, 1)
                } else {
                    (line, column + 1)
                }
            });
        Location::new(line, column)
    }
}

impl<'a> From<&'a str> for Cursor<'a, u8> {
    fn from(input: &'a str) -> Self {
        Cursor::new(input.as_bytes())
    }
}

impl<'a, U: Unit> From<&'a [U]> for Cursor<'a, U> {
    fn from(input: &'a [U]) -> Self {
        Cursor::new(input)
    }
}
