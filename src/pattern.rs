//! Module with the pattern capability and the literal back-end.
//!
//! A pattern is anything that can decide whether it matches the haystack starting exactly at a
//! given offset. The cursor owns the offset discipline, the pattern only reports the length of
//! the match.
use crate::Unit;

/// An anchored matcher over a buffer of code units.
///
/// Implementations must only report matches that start exactly at `offset`. They must never search
/// forward for a later occurrence, otherwise invalid input would be skipped silently.
///
/// The whole haystack is passed so that implementations can evaluate look-around assertions that
/// need the context before `offset`.
pub trait Pattern<U> {
    /// Attempts an anchored match at `offset` and returns the length of the match in code units.
    /// A length of zero is a valid (empty) match.
    fn match_at(&self, haystack: &[U], offset: usize) -> Option<usize>;
}

impl<U, P: Pattern<U> + ?Sized> Pattern<U> for &P {
    #[inline]
    fn match_at(&self, haystack: &[U], offset: usize) -> Option<usize> {
        (**self).match_at(haystack, offset)
    }
}

impl<U, P: Pattern<U> + ?Sized> Pattern<U> for Box<P> {
    #[inline]
    fn match_at(&self, haystack: &[U], offset: usize) -> Option<usize> {
        (**self).match_at(haystack, offset)
    }
}

/// A pattern that matches a fixed sequence of code units.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal<U> {
    units: Vec<U>,
}

impl<U: Unit> Literal<U> {
    /// Create a new literal pattern.
    pub fn new(units: impl Into<Vec<U>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Get the units of the literal.
    #[inline]
    pub fn units(&self) -> &[U] {
        &self.units
    }
}

impl From<&str> for Literal<u8> {
    fn from(s: &str) -> Self {
        Literal::new(s.as_bytes())
    }
}

impl From<&str> for Literal<char> {
    fn from(s: &str) -> Self {
        Literal::new(s.chars().collect::<Vec<_>>())
    }
}

impl From<&str> for Literal<u16> {
    fn from(s: &str) -> Self {
        Literal::new(s.encode_utf16().collect::<Vec<_>>())
    }
}

impl<U: Unit> Pattern<U> for Literal<U> {
    fn match_at(&self, haystack: &[U], offset: usize) -> Option<usize> {
        haystack
            .get(offset..)
            .filter(|rest| rest.starts_with(&self.units))
            .map(|_| self.units.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_is_anchored() {
        let lit = Literal::<u8>::from("abc");
        assert_eq!(lit.match_at(b"xxabc", 0), None);
        assert_eq!(lit.match_at(b"xxabc", 2), Some(3));
        assert_eq!(lit.match_at(b"xxab", 2), None);
        assert_eq!(lit.match_at(b"xxabc", 6), None);
    }

    #[test]
    fn test_wide_literal() {
        let haystack: Vec<u16> = "a ≠ b".encode_utf16().collect();
        let lit = Literal::<u16>::from("≠");
        assert_eq!(lit.match_at(&haystack, 2), Some(1));
        let boxed: Box<dyn Pattern<u16>> = Box::new(lit);
        assert_eq!(boxed.match_at(&haystack, 0), None);
    }

    #[test]
    fn test_empty_literal_matches_empty() {
        let lit = Literal::<char>::new(Vec::new());
        assert_eq!(lit.match_at(&['a'], 1), Some(0));
    }
}
