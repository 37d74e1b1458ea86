//! Attribute emitter and LDIF entries.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::escape::escape_value;

/// Options controlling how values are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Encode values containing line breaks as base64 blocks (`attr:: ...`).
    ///
    /// With this off, such values are written through the escaper instead,
    /// which keeps the output readable but not importable.
    pub base64: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self { base64: true }
    }
}

/// The value half of an LDIF content line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineValue {
    /// Safe to write after `: `.
    Text(String),
    /// Base64 text written after `:: `.
    Base64(String),
}

/// A single `attribute: value` or `attribute:: base64` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LdifLine {
    pub attribute: String,
    pub value: LineValue,
}

impl LdifLine {
    /// Returns the value as written on the line, without the separator.
    #[must_use]
    pub fn encoded_value(&self) -> &str {
        match &self.value {
            LineValue::Text(v) | LineValue::Base64(v) => v,
        }
    }

    /// Returns whether the value is base64 encoded.
    #[must_use]
    pub const fn is_base64(&self) -> bool {
        matches!(self.value, LineValue::Base64(_))
    }
}

impl fmt::Display for LdifLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            LineValue::Text(v) => write!(f, "{}: {v}", self.attribute),
            LineValue::Base64(v) => write!(f, "{}:: {v}", self.attribute),
        }
    }
}

/// Writes attribute/value pairs as LDIF lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    #[must_use]
    pub const fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Emits a line for `attribute`, or nothing when `value` is `None`.
    ///
    /// Values containing a line feed or carriage return are base64 encoded
    /// when enabled; everything else is escaped.
    #[must_use]
    pub fn emit(&self, attribute: &str, value: Option<&str>) -> Option<LdifLine> {
        let value = value?;

        let value = if self.options.base64 && value.contains(['\n', '\r']) {
            LineValue::Base64(STANDARD.encode(value))
        } else {
            LineValue::Text(escape_value(value))
        };

        Some(LdifLine {
            attribute: attribute.to_string(),
            value,
        })
    }

    /// Emits a line whose value has already been escaped, verbatim.
    ///
    /// Only the `dn` line goes through here; it is assembled from values that
    /// were escaped one by one.
    #[must_use]
    pub fn emit_pre_escaped(attribute: &str, value: &str) -> LdifLine {
        LdifLine {
            attribute: attribute.to_string(),
            value: LineValue::Text(value.to_string()),
        }
    }
}

/// A complete LDIF entry: content lines followed by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    lines: Vec<LdifLine>,
}

impl Entry {
    /// Returns the content lines in output order.
    #[must_use]
    pub fn lines(&self) -> &[LdifLine] {
        &self.lines
    }

    /// Returns the first line for `attribute`.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&LdifLine> {
        self.lines.iter().find(|l| l.attribute == attribute)
    }

    /// Returns all lines for `attribute`.
    #[must_use]
    pub fn get_all(&self, attribute: &str) -> Vec<&LdifLine> {
        self.lines
            .iter()
            .filter(|l| l.attribute == attribute)
            .collect()
    }

    /// Returns the attribute names in output order.
    #[must_use]
    pub fn attributes(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.attribute.as_str()).collect()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f)
    }
}

/// Collects lines for one [`Entry`].
#[derive(Debug, Default)]
pub struct EntryBuilder {
    lines: Vec<LdifLine>,
}

impl EntryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line, if there is one.
    pub fn push(&mut self, line: impl Into<Option<LdifLine>>) {
        if let Some(line) = line.into() {
            self.lines.push(line);
        }
    }

    #[must_use]
    pub fn build(self) -> Entry {
        Entry { lines: self.lines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> Emitter {
        Emitter::new(EmitOptions::default())
    }

    #[test]
    fn none_emits_nothing() {
        assert_eq!(emitter().emit("cn", None), None);
    }

    #[test]
    fn plain_value_is_escaped() {
        let line = emitter().emit("cn", Some("Doe, Jane")).unwrap();
        assert_eq!(line.to_string(), "cn: Doe\\2C Jane");
        assert!(!line.is_base64());
    }

    #[test]
    fn line_break_uses_base64() {
        let line = emitter().emit("description", Some("a\nb")).unwrap();
        assert!(line.is_base64());
        assert_eq!(line.to_string(), "description:: YQpi");

        let decoded = STANDARD.decode(line.encoded_value()).unwrap();
        assert_eq!(decoded, b"a\nb");
    }

    #[test]
    fn carriage_return_uses_base64() {
        let line = emitter().emit("description", Some("a\rb")).unwrap();
        assert!(line.is_base64());
    }

    #[test]
    fn base64_can_be_disabled() {
        let emitter = Emitter::new(EmitOptions { base64: false });
        let line = emitter.emit("description", Some("a;\nb")).unwrap();
        assert!(!line.is_base64());
        assert_eq!(line.encoded_value(), "a\\3B\\0Ab");
    }

    #[test]
    fn pre_escaped_is_verbatim() {
        let line = Emitter::emit_pre_escaped("dn", "cn=Doe\\2C Jane,mail=jane@x.com");
        assert_eq!(line.to_string(), "dn: cn=Doe\\2C Jane,mail=jane@x.com");
    }

    #[test]
    fn entry_ends_with_blank_line() {
        let mut builder = EntryBuilder::new();
        builder.push(emitter().emit("cn", Some("Jane")));
        builder.push(emitter().emit("sn", None));
        builder.push(emitter().emit("mail", Some("jane@x.com")));
        let entry = builder.build();

        assert_eq!(entry.attributes(), vec!["cn", "mail"]);
        assert_eq!(entry.to_string(), "cn: Jane\nmail: jane@x.com\n\n");
    }
}
