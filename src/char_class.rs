//! Module with the character class back-end.
use log::trace;

use crate::{
    internal::{parse_class_ranges, CodePointRange},
    Pattern, Result, Unit, UnitSet,
};

/// A pattern that matches a single character out of a class, e.g. `[a-zA-Z_]`, `\d` or `.`.
///
/// The class is parsed with `regex-syntax`, so the usual bracket syntax, Perl classes and Unicode
/// classes are supported. The input is decoded according to its [Unit] type: UTF-8 for bytes,
/// UTF-16 for `u16` and scalar values for `u32` and `char`. A match always spans whole characters,
/// i.e. all units of a multi-unit encoding.
///
/// A repeated class matches the longest run of one or more characters out of the class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharClass {
    pattern: String,
    ranges: Vec<CodePointRange>,
    repeated: bool,
}

impl CharClass {
    /// Create a new character class from the given pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Self::build(pattern, false)
    }

    /// Create a new character class that ignores the case of letters.
    pub fn case_insensitive(pattern: &str) -> Result<Self> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, case_insensitive: bool) -> Result<Self> {
        let ranges = parse_class_ranges(pattern, case_insensitive)?;
        trace!("Created character class {}", pattern.escape_default());
        Ok(Self {
            pattern: pattern.to_string(),
            ranges,
            repeated: false,
        })
    }

    /// Let the class match a run of one or more units instead of a single one.
    pub fn repeated(self) -> Self {
        Self {
            repeated: true,
            ..self
        }
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Check if the class matches a run of units.
    #[inline]
    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    /// Returns true if the character belongs to the class.
    pub fn contains_char(&self, c: char) -> bool {
        let value = u32::from(c);
        self.ranges
            .binary_search_by(|&(lo, hi)| {
                if hi < value {
                    std::cmp::Ordering::Less
                } else if lo > value {
                    std::cmp::Ordering::Greater
                } else {
                    std::cmp::Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Returns true if the unit on its own encodes a character that belongs to the class.
    /// Parts of multi-unit encodings never belong to a class.
    #[inline]
    pub fn contains<U: Unit>(&self, unit: U) -> bool {
        unit.to_scalar().is_some_and(|c| self.contains_char(c))
    }
}

impl<U: Unit> Pattern<U> for CharClass {
    fn match_at(&self, haystack: &[U], offset: usize) -> Option<usize> {
        let rest = haystack.get(offset..)?;
        let mut len = 0;
        while let Some((c, width)) = U::decode(&rest[len..]) {
            if !self.contains_char(c) {
                break;
            }
            len += width;
            if !self.repeated {
                break;
            }
        }
        (len > 0).then_some(len)
    }
}

impl<U: Unit> UnitSet<U> for CharClass {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        self.contains(unit)
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern.escape_default())?;
        if self.repeated {
            write!(f, "+")?;
        }
        Ok(())
    }
}
