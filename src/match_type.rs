use crate::{Span, Unit};

/// A successful match of a cursor operation.
///
/// The matched units are borrowed from the input buffer, nothing is copied. An empty match is a
/// valid result and differs from no match at all, which is represented by `None`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match<'a, U> {
    /// The matched units.
    units: &'a [U],
    /// The span of the matched units in the input buffer.
    span: Span,
}

impl<'a, U: Unit> Match<'a, U> {
    /// Create a new match over `input[span]`.
    pub(crate) fn new(input: &'a [U], span: Span) -> Self {
        Self {
            units: &input[span.range()],
            span,
        }
    }

    /// Get the matched units.
    #[inline]
    pub fn as_slice(&self) -> &'a [U] {
        self.units
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the number of matched units.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

impl<'a> Match<'a, u8> {
    /// The matched bytes as string slice.
    /// Returns `None` if the match splits a multi-byte UTF-8 sequence.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.units).ok()
    }
}

impl Match<'_, char> {
    /// Collects the matched characters into a string.
    pub fn to_text(&self) -> String {
        self.units.iter().collect()
    }
}

impl Match<'_, u16> {
    /// Decodes the matched UTF-16 units, replacing invalid sequences.
    pub fn to_text(&self) -> String {
        String::from_utf16_lossy(self.units)
    }
}

impl PartialEq<str> for Match<'_, u8> {
    fn eq(&self, other: &str) -> bool {
        self.units == other.as_bytes()
    }
}

impl PartialEq<&str> for Match<'_, u8> {
    fn eq(&self, other: &&str) -> bool {
        self.units == other.as_bytes()
    }
}

impl std::fmt::Display for Match<'_, u8> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.units))
    }
}
