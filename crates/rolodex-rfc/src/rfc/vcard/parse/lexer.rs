//! vCard lexer for line unfolding and content line parsing.
//!
//! vCard uses the same folding/unfolding rules as iCalendar (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::VCardParameter;

/// Unfolds a vCard document by removing line continuations.
///
/// Line continuations are CRLF followed by a single space or tab.
/// Also handles bare LF for lenient parsing.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            _ => result.push(c),
        }
    }

    result
}

/// Joins quoted-printable soft line breaks (`=` at the end of a line) of
/// vCard 2.1 values.
///
/// Only lines whose name and parameters mention `QUOTED-PRINTABLE`, and the
/// lines continuing them, are joined. Runs after [`unfold`].
#[must_use]
pub fn join_soft_breaks(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut continued = false;

    for line in input.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let quoted_printable = continued || has_quoted_printable_header(line);
        match line.strip_suffix('=') {
            Some(head) if quoted_printable => {
                result.push_str(head);
                continued = true;
            }
            _ => {
                result.push_str(line);
                result.push('\n');
                continued = false;
            }
        }
    }

    result
}

fn has_quoted_printable_header(line: &str) -> bool {
    line.split_once(':')
        .is_some_and(|(head, _)| head.to_ascii_uppercase().contains(QUOTED_PRINTABLE))
}

const QUOTED_PRINTABLE: &str = "QUOTED-PRINTABLE";

/// Splits unfolded input into non-empty logical lines.
#[must_use]
pub fn split_lines(input: &str) -> Vec<&str> {
    input
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string, still escaped.
    pub value: String,
}

impl ContentLine {
    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&VCardParameter> {
        self.params.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Returns every TYPE value, across repeated TYPE parameters.
    #[must_use]
    pub fn type_values(&self) -> Vec<&str> {
        self.params
            .iter()
            .filter(|p| p.name == "TYPE")
            .flat_map(|p| p.values.iter().map(String::as_str))
            .collect()
    }

    /// Returns whether the value is quoted-printable encoded, either as
    /// `ENCODING=QUOTED-PRINTABLE` or as a bare 2.1 parameter.
    #[must_use]
    pub fn is_quoted_printable(&self) -> bool {
        self.get_param("ENCODING")
            .is_some_and(|p| p.has_value(QUOTED_PRINTABLE))
            || self.has_type(QUOTED_PRINTABLE)
    }

    /// Returns the CHARSET parameter, if any.
    #[must_use]
    pub fn charset(&self) -> Option<&str> {
        self.get_param("CHARSET").and_then(VCardParameter::value)
    }

    /// Returns whether this property has the specified TYPE value.
    #[must_use]
    pub fn has_type(&self, type_value: &str) -> bool {
        self.params
            .iter()
            .any(|p| p.name == "TYPE" && p.has_value(type_value))
    }
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param=value]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            "missing colon separator",
        )
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            format!("invalid property name: {name}"),
        ));
    }

    let params = match params_str {
        Some(params_str) => parse_parameters(params_str, line_num)?,
        None => Vec::new(),
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Quoted parameter values may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    if let Some((group, rest)) = s.split_once('.') {
        // A dot inside the parameters is not a group separator
        if !group.is_empty()
            && group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(group), rest);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns remaining string.
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let eq_pos = s.find('=');
    let semi_pos = s.find(';');

    // vCard 2.1 allows bare values: TEL;WORK;FAX:...
    let is_bare = match (eq_pos, semi_pos) {
        (None, _) => true,
        (Some(eq), Some(semi)) => semi < eq,
        (Some(_), None) => false,
    };

    if is_bare {
        let (value, rest) = match semi_pos {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };
        if value.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::InvalidParameter,
                line_num,
                "empty parameter",
            ));
        }
        return Ok((VCardParameter::bare_type(value), rest));
    }

    let eq_pos = eq_pos.unwrap_or_default();
    let name = &s[..eq_pos];
    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "missing parameter name",
        ));
    }

    let (values, remaining) = parse_param_values(&s[eq_pos + 1..]);

    Ok((VCardParameter::multi(name, values), remaining))
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    while let Some(c) = chars.next() {
        consumed += c.len_utf8();

        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut current_value)),
            ';' if !in_quotes => {
                values.push(current_value);
                return (values, &s[consumed..]);
            }
            '^' => match chars.peek().copied() {
                // RFC 6868 caret encoding
                Some(next @ ('n' | '\'' | '^')) => {
                    chars.next();
                    consumed += 1;
                    current_value.push(match next {
                        'n' => '\n',
                        '\'' => '"',
                        _ => '^',
                    });
                }
                _ => current_value.push('^'),
            },
            _ => current_value.push(c),
        }
    }

    values.push(current_value);
    (values, "")
}
