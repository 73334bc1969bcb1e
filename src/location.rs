//! Module with the location type used for diagnostics.
//! A location is a struct that contains a line and column number.

use std::fmt;

/// A location in the input buffer.
/// The location is represented by a line and column number.
/// The line and column numbers are 1-based and counted in code units.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// The line number of the location.
    pub line: usize,
    /// The column number of the location.
    pub column: usize,
}

impl Location {
    /// Create a new location.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        debug_assert!(column > 0, "column number must be greater than 0");
        Self { line, column }
    }

    /// Get the line number of the location.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the location.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Location {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl From<(usize, usize)> for Location {
    fn from((line, column): (usize, usize)) -> Self {
        Location::new(line, column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location() {
        let loc = Location::new(3, 7);
        assert_eq!(loc.line(), 3);
        assert_eq!(loc.column(), 7);
        assert_eq!(format!("{}", loc), "3:7");
        assert_eq!(Location::default(), Location::from((1, 1)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_location_serialization() {
        let loc = Location::new(2, 5);
        let serialized = serde_json::to_string(&loc).unwrap();
        assert_eq!(serialized, r#"{"line":2,"column":5}"#);
        let deserialized: Location = serde_json::from_str(&serialized).unwrap();
        assert_eq!(loc, deserialized);
    }
}
