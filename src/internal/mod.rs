/// The parser module contains the character class parser.
mod parser;
pub(crate) use parser::{parse_class_ranges, CodePointRange};
