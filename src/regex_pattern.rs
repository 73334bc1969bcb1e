//! Module with the regular expression back-end.
//!
//! The back-end uses the meta regex engine of the `regex_automata` crate. Every search runs in
//! anchored mode on the remaining input, so a match is only reported if it starts exactly at the
//! cursor offset. Assertions like `^` or `\A` therefore hold at the cursor offset.
//!
//! Byte buffers are searched in place. Wide buffers (`u16` and `char`) are transcoded to UTF-8
//! from the offset to the end on every search, and the length of the match is mapped back to
//! code units. Unpaired surrogates are replaced by U+FFFD, which keeps the mapping exact.
use log::{debug, trace};
use regex_automata::{meta, util::syntax, Anchored, Input};

use crate::{Pattern, ReadrError, ReadrErrorKind, Result};

/// A compiled regular expression that matches byte, UTF-16 and `char` buffers.
#[derive(Clone, Debug)]
pub struct Regex {
    pattern: String,
    rx: meta::Regex,
}

impl Regex {
    /// Compile a regular expression with the default configuration.
    pub fn new(pattern: &str) -> Result<Self> {
        RegexBuilder::new().build(pattern)
    }

    /// Get the pattern.
    #[inline]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Regex {
    // Anchored search at the start of `rest`. Returns the length of the match in bytes.
    fn find_anchored(&self, rest: &[u8], offset: usize) -> Option<usize> {
        let input = Input::new(rest).anchored(Anchored::Yes);
        let matched = self.rx.find(input)?;
        debug_assert_eq!(matched.start(), 0, "anchored search must start at the offset");
        trace!(
            "Regex '{}' matched {} bytes at offset {}",
            self.pattern.escape_default(),
            matched.end(),
            offset
        );
        Some(matched.end())
    }
}

impl Pattern<u8> for Regex {
    fn match_at(&self, haystack: &[u8], offset: usize) -> Option<usize> {
        let rest = haystack.get(offset..)?;
        self.find_anchored(rest, offset)
    }
}

impl Pattern<char> for Regex {
    fn match_at(&self, haystack: &[char], offset: usize) -> Option<usize> {
        let rest: String = haystack.get(offset..)?.iter().collect();
        let end = self.find_anchored(rest.as_bytes(), offset)?;
        // A match can end inside a character only if UTF-8 mode is disabled.
        Some(rest.get(..end)?.chars().count())
    }
}

impl Pattern<u16> for Regex {
    fn match_at(&self, haystack: &[u16], offset: usize) -> Option<usize> {
        let rest: String = char::decode_utf16(haystack.get(offset..)?.iter().copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
        let end = self.find_anchored(rest.as_bytes(), offset)?;
        Some(rest.get(..end)?.encode_utf16().count())
    }
}

impl std::fmt::Display for Regex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern.escape_default())
    }
}

/// A builder for regular expressions with non-default syntax options.
#[derive(Debug, Clone)]
pub struct RegexBuilder {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    unicode: bool,
    utf8: bool,
}

impl Default for RegexBuilder {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            unicode: true,
            utf8: true,
        }
    }
}

impl RegexBuilder {
    /// Creates a new regex builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters match regardless of their case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// `^` and `$` match at line boundaries.
    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    /// `.` matches line feeds too.
    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    /// Enables Unicode aware classes like `\w` and `\d`.
    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    /// Restricts matches to valid UTF-8.
    /// Disable this to match arbitrary bytes, e.g. with `(?-u:\xFF)`.
    pub fn utf8(mut self, yes: bool) -> Self {
        self.utf8 = yes;
        self
    }

    /// Builds the regular expression.
    pub fn build(&self, pattern: &str) -> Result<Regex> {
        debug!("Building regex '{}' with {:?}", pattern.escape_default(), self);
        let syntax_config = syntax::Config::new()
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .unicode(self.unicode)
            .utf8(self.utf8);
        let rx = meta::Regex::builder()
            .syntax(syntax_config)
            .configure(meta::Config::new().utf8_empty(self.utf8))
            .build(pattern)
            .map_err(|e| {
                ReadrError::new(ReadrErrorKind::RegexBuildError(e, pattern.to_string()))
            })?;
        Ok(Regex {
            pattern: pattern.to_string(),
            rx,
        })
    }
}
