//! This module contains the parser for character class patterns.
//! We use the `regex_syntax` crate to parse the pattern into its high-level intermediate
//! representation, but only patterns that denote a single code point are accepted, i.e. bracket
//! classes, Perl and Unicode classes, the dot and single literal characters.

use crate::{ReadrError, ReadrErrorKind, Result};
use log::trace;
use regex_syntax::hir::{Class, Hir, HirKind};
use std::time::Instant;

/// An inclusive range of code points.
pub(crate) type CodePointRange = (u32, u32);

/// Parse a character class pattern into a sorted list of non-overlapping code point ranges.
/// # Arguments
/// * `input` - The class pattern, e.g. `[a-zA-Z_]` or `\d`.
/// * `case_insensitive` - Whether letters should match regardless of their case.
/// # Errors
/// An error is returned if the syntax is invalid or if the pattern matches more than a single
/// code point.
pub(crate) fn parse_class_ranges(
    input: &str,
    case_insensitive: bool,
) -> Result<Vec<CodePointRange>> {
    let now = Instant::now();
    let hir = regex_syntax::ParserBuilder::new()
        .case_insensitive(case_insensitive)
        .build()
        .parse(input)
        .map_err(|e| ReadrError::new(ReadrErrorKind::RegexSyntaxError(e, input.to_string())))?;
    let ranges = ranges_of(&hir, input)?;
    trace!(
        "Parsing class '{}' into {} ranges took {} microseconds.",
        input.escape_default(),
        ranges.len(),
        now.elapsed().as_micros()
    );
    Ok(ranges)
}

fn ranges_of(hir: &Hir, input: &str) -> Result<Vec<CodePointRange>> {
    match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => Ok(class
            .iter()
            .map(|r| (r.start() as u32, r.end() as u32))
            .collect()),
        HirKind::Class(Class::Bytes(class)) => Ok(class
            .iter()
            .map(|r| (r.start() as u32, r.end() as u32))
            .collect()),
        HirKind::Literal(literal) => {
            let mut chars = std::str::from_utf8(&literal.0)
                .map_err(|_| unsupported(input))?
                .chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(vec![(c as u32, c as u32)]),
                _ => Err(unsupported(input)),
            }
        }
        HirKind::Capture(capture) => ranges_of(&capture.sub, input),
        _ => Err(unsupported(input)),
    }
}

fn unsupported(input: &str) -> ReadrError {
    ReadrError::new(ReadrErrorKind::UnsupportedPattern(format!(
        "'{}' does not denote a single character",
        input.escape_default()
    )))
}
