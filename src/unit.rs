//! Module with the code unit abstraction.
//!
//! A cursor scans a buffer of fixed-width code units. Narrow buffers are `u8` (e.g. the bytes of a
//! `&str`), wide buffers are `u16` (UTF-16) and `u32`/`char` hold full scalar values.
use std::{fmt::Debug, hash::Hash};

use rustc_hash::FxHashSet;

/// A fixed-width code unit a [crate::Cursor] can scan over.
pub trait Unit: Copy + Eq + Ord + Hash + Debug + Default {
    /// The sentinel returned by lookahead operations at end of input.
    const NUL: Self;
    /// The line feed unit. It separates lines for location diagnostics.
    const LINE_FEED: Self;
    /// The space unit.
    const SPACE: Self;
    /// The horizontal tab unit.
    const TAB: Self;

    /// The scalar value of the unit if the unit encodes a whole character on its own.
    ///
    /// A UTF-8 lead or continuation byte and a UTF-16 surrogate yield `None`.
    fn to_scalar(self) -> Option<char>;

    /// Decodes the character at the start of `units`.
    /// Returns the character and the number of units it occupies, or `None` if the units don't
    /// start with a valid encoding.
    fn decode(units: &[Self]) -> Option<(char, usize)>;
}

macro_rules! impl_unit {
    ($tp:ty, $to_scalar:ident, $decode:ident) => {
        impl Unit for $tp {
            const NUL: Self = 0;
            const LINE_FEED: Self = b'\n' as $tp;
            const SPACE: Self = b' ' as $tp;
            const TAB: Self = b'\t' as $tp;

            #[inline]
            fn to_scalar(self) -> Option<char> {
                $to_scalar(self)
            }

            #[inline]
            fn decode(units: &[Self]) -> Option<(char, usize)> {
                $decode(units)
            }
        }
    };
}

impl_unit!(u8, ascii_scalar, decode_utf8);
impl_unit!(u16, utf16_scalar, decode_utf16);
impl_unit!(u32, utf32_scalar, decode_utf32);

impl Unit for char {
    const NUL: Self = '\0';
    const LINE_FEED: Self = '\n';
    const SPACE: Self = ' ';
    const TAB: Self = '\t';

    #[inline]
    fn to_scalar(self) -> Option<char> {
        Some(self)
    }

    #[inline]
    fn decode(units: &[Self]) -> Option<(char, usize)> {
        units.first().map(|&c| (c, 1))
    }
}

fn ascii_scalar(unit: u8) -> Option<char> {
    unit.is_ascii().then_some(unit as char)
}

fn utf16_scalar(unit: u16) -> Option<char> {
    char::from_u32(u32::from(unit))
}

fn utf32_scalar(unit: u32) -> Option<char> {
    char::from_u32(unit)
}

fn decode_utf8(units: &[u8]) -> Option<(char, usize)> {
    let width = match *units.first()? {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return None,
    };
    let c = std::str::from_utf8(units.get(..width)?).ok()?.chars().next()?;
    Some((c, width))
}

fn decode_utf16(units: &[u16]) -> Option<(char, usize)> {
    let c = char::decode_utf16(units.iter().copied()).next()?.ok()?;
    Some((c, c.len_utf16()))
}

fn decode_utf32(units: &[u32]) -> Option<(char, usize)> {
    let c = char::from_u32(*units.first()?)?;
    Some((c, 1))
}

/// A set of code units, used by [crate::Cursor::consume].
pub trait UnitSet<U> {
    /// Returns true if the unit is a member of the set.
    fn contains_unit(&self, unit: U) -> bool;
}

impl<U: Unit> UnitSet<U> for [U] {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        self.contains(&unit)
    }
}

impl<U: Unit, const N: usize> UnitSet<U> for [U; N] {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        self.contains(&unit)
    }
}

impl<U: Unit> UnitSet<U> for Vec<U> {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        self.contains(&unit)
    }
}

impl<U: Unit> UnitSet<U> for FxHashSet<U> {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        self.contains(&unit)
    }
}

// A string slice is a set of its bytes.
impl UnitSet<u8> for str {
    #[inline]
    fn contains_unit(&self, unit: u8) -> bool {
        self.as_bytes().contains(&unit)
    }
}

impl<U, S: UnitSet<U> + ?Sized> UnitSet<U> for &S {
    #[inline]
    fn contains_unit(&self, unit: U) -> bool {
        (**self).contains_unit(unit)
    }
}
