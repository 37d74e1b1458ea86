//! vCard parsing.
//!
//! ## Features
//!
//! - Supports vCard 2.1, 3.0 and 4.0
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL)
//! - Accepts bare 2.1 parameters (`TEL;WORK:`) as TYPE values
//! - RFC 6868 caret encoding for parameters
//! - Quoted-printable 2.1 values, including soft line breaks

mod error;
mod lexer;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, join_soft_breaks, parse_content_line, split_lines, unfold};
pub use parser::parse;
pub use values::{decode_quoted_printable, split_component, split_structured, unescape_text};
