use thiserror::Error;

/// The result type for the `readr` crate.
pub type Result<T> = std::result::Result<T, ReadrError>;

/// The error type for the `readr` crate.
///
/// Errors only arise while constructing pattern back-ends. The cursor itself never fails; a
/// missing match is reported as `None` or `false`.
#[derive(Error, Debug)]
pub struct ReadrError {
    /// The source of the error.
    pub source: Box<ReadrErrorKind>,
}

impl ReadrError {
    /// Create a new `ReadrError`.
    pub fn new(kind: ReadrErrorKind) -> Self {
        ReadrError {
            source: Box::new(kind),
        }
    }

    /// Access the kind of the error.
    #[inline]
    pub fn kind(&self) -> &ReadrErrorKind {
        &self.source
    }
}

impl std::fmt::Display for ReadrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// The error kind type.
#[derive(Error, Debug)]
pub enum ReadrErrorKind {
    /// A character class pattern could not be parsed.
    #[error("'{1}' {0}")]
    RegexSyntaxError(regex_syntax::Error, String),

    /// A regular expression could not be compiled by the regex engine.
    #[error("'{1}' {0}")]
    RegexBuildError(regex_automata::meta::BuildError, String),

    /// The pattern is valid but can't be used for the requested back-end.
    #[error("Unsupported pattern: {0}")]
    UnsupportedPattern(String),
}

impl From<ReadrErrorKind> for ReadrError {
    fn from(kind: ReadrErrorKind) -> Self {
        ReadrError::new(kind)
    }
}
