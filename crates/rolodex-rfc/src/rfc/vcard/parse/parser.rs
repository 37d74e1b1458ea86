//! vCard document parser.

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{join_soft_breaks, parse_content_line, split_lines, unfold};
use super::values::decode_quoted_printable;
use crate::rfc::vcard::core::{VCard, VCardVersion};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found,
/// in document order. Content outside `BEGIN:VCARD`/`END:VCARD` is ignored.
///
/// ## Errors
/// Returns a parse error if a content line is malformed, a card declares an
/// unsupported version, or the last card is not closed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = join_soft_breaks(&unfold(input));
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(lines: Vec<&'a str>) -> Self {
        Self { lines, pos: 0 }
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while let Some(&line) = self.lines.get(self.pos) {
            self.pos += 1;
            if line.trim().eq_ignore_ascii_case("BEGIN:VCARD") {
                cards.push(self.parse_vcard()?);
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let mut card = VCard::default();
        let start_line = self.pos;

        while let Some(&line) = self.lines.get(self.pos) {
            self.pos += 1;
            let line_num = self.pos;

            if line.trim().eq_ignore_ascii_case("END:VCARD") {
                return Ok(card);
            }

            let mut content_line = parse_content_line(line, line_num)?;
            if content_line.is_quoted_printable() {
                content_line.value =
                    decode_quoted_printable(&content_line.value, content_line.charset());
            }

            if content_line.name == "VERSION" {
                card.version = VCardVersion::parse(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        format!("unsupported vCard version: {}", content_line.value),
                    )
                })?;
            } else {
                card.properties.push(content_line);
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnexpectedEof,
            start_line,
            "vCard not closed with END:VCARD",
        ))
    }
}
