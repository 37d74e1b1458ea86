//! Contact records as read from a source address book.
//!
//! These types are a read-only input model. Text fields use the empty string
//! for "absent"; the accessors on [`Contact`] and [`Address`] hide that
//! convention behind `Option`.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One contact from the source address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Contact {
    /// Full display name.
    pub name: String,
    pub given_name: String,
    pub surname: String,
    /// Email addresses in preference order.
    pub emails: Vec<String>,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
    pub company: String,
    pub notes: Option<Notes>,
    /// Alternate names. Accepts a single string or a list on input.
    #[serde(deserialize_with = "one_or_many")]
    pub aka: Vec<String>,
}

impl Contact {
    /// Creates a contact with just a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the display name, if non-empty.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    #[must_use]
    pub fn given_name(&self) -> Option<&str> {
        non_empty(&self.given_name)
    }

    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        non_empty(&self.surname)
    }

    #[must_use]
    pub fn company(&self) -> Option<&str> {
        non_empty(&self.company)
    }
}

/// A labeled phone number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phone {
    /// Location label, e.g. "work" or "home".
    pub label: String,
    #[serde(flatten)]
    pub number: PhoneNumber,
}

impl Phone {
    /// Creates a phone with a free-form number.
    #[must_use]
    pub fn new(label: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            number: PhoneNumber::Free {
                number: number.into(),
            },
        }
    }

    /// Creates a phone with a structured North-American number.
    #[must_use]
    pub fn structured(
        label: impl Into<String>,
        area: u16,
        exchange: u16,
        suffix: u16,
        extension: Option<u32>,
    ) -> Self {
        Self {
            label: label.into(),
            number: PhoneNumber::Structured {
                area,
                exchange,
                suffix,
                extension,
            },
        }
    }

    /// Renders the number for display.
    #[must_use]
    pub fn display(&self) -> String {
        self.number.to_string()
    }
}

/// The number part of a [`Phone`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PhoneNumber {
    /// Free-form text, kept verbatim.
    Free { number: String },
    /// Area code, exchange, suffix and optional extension.
    Structured {
        area: u16,
        exchange: u16,
        suffix: u16,
        #[serde(default)]
        extension: Option<u32>,
    },
}

impl PhoneNumber {
    /// Returns whether there is nothing to display.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Free { number } => number.trim().is_empty(),
            Self::Structured { .. } => false,
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free { number } => f.write_str(number),
            Self::Structured {
                area,
                exchange,
                suffix,
                extension,
            } => {
                if *area != 0 {
                    write!(f, "({area:03}) ")?;
                }
                write!(f, "{exchange:03}-{suffix:04}")?;
                match extension {
                    Some(ext) if *ext != 0 => write!(f, " x{ext}"),
                    _ => Ok(()),
                }
            }
        }
    }
}

/// A labeled postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Address {
    pub label: String,
    /// Street lines, first line first.
    pub streets: Vec<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl Address {
    /// Creates an empty address with a label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    #[must_use]
    pub fn state(&self) -> Option<&str> {
        non_empty(&self.state)
    }

    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        non_empty(&self.postal_code)
    }
}

/// A labeled free-text note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub label: String,
    pub text: String,
}

impl Note {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// The notes attached to a contact.
///
/// Sources either keep a single free-text blob or an ordered mapping from
/// label to text. On input a string gives [`Notes::Text`] and an object gives
/// [`Notes::Fields`] with key order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notes {
    Text(String),
    Fields(Vec<Note>),
}

impl<'de> Deserialize<'de> for Notes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NotesVisitor;

        impl<'de> Visitor<'de> for NotesVisitor {
            type Value = Notes;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or a map of labels to strings")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Notes, E> {
                Ok(Notes::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Notes, E> {
                Ok(Notes::Text(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Notes, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, text)) = map.next_entry::<String, String>()? {
                    fields.push(Note { label, text });
                }
                Ok(Notes::Fields(fields))
            }
        }

        deserializer.deserialize_any(NotesVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(s) if s.is_empty() => Vec::new(),
        OneOrMany::One(s) => vec![s],
        OneOrMany::Many(v) => v,
    })
}

fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_phone_display() {
        let phone = Phone::structured("work", 555, 123, 4567, Some(89));
        assert_eq!(phone.display(), "(555) 123-4567 x89");
    }

    #[test]
    fn structured_phone_without_area_or_extension() {
        let phone = Phone::structured("home", 0, 5, 42, Some(0));
        assert_eq!(phone.display(), "005-0042");
    }

    #[test]
    fn free_phone_display_is_verbatim() {
        let phone = Phone::new("work", "+44 20 7946 0000");
        assert_eq!(phone.display(), "+44 20 7946 0000");
        assert!(!phone.number.is_empty());
        assert!(Phone::new("work", "  ").number.is_empty());
    }

    #[test]
    fn contact_accessors_hide_empty_strings() {
        let contact = Contact::named("");
        assert_eq!(contact.display_name(), None);
        assert_eq!(contact.company(), None);

        let contact = Contact::named("Jane Doe");
        assert_eq!(contact.display_name(), Some("Jane Doe"));
    }

    #[test]
    fn deserialize_full_contact() {
        let json = r#"{
            "name": "Jane Doe",
            "given_name": "Jane",
            "emails": ["jane@x.com"],
            "phones": [
                {"label": "work", "number": "555-1000"},
                {"label": "home", "area": 555, "exchange": 123, "suffix": 4567}
            ],
            "addresses": [{"label": "home", "streets": ["1 Main St"], "city": "Springfield"}],
            "notes": {"title": "Engineer", "aim": "janed", "notes": "met at conf"},
            "aka": "JD"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.surname(), None);
        assert_eq!(contact.phones[0].display(), "555-1000");
        assert_eq!(contact.phones[1].display(), "(555) 123-4567");
        assert_eq!(contact.addresses[0].city(), Some("Springfield"));
        assert_eq!(contact.aka, vec!["JD"]);

        let Some(Notes::Fields(fields)) = contact.notes else {
            panic!("expected note fields");
        };
        let labels: Vec<&str> = fields.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["title", "aim", "notes"]);
    }

    #[test]
    fn deserialize_text_notes_and_aka_list() {
        let json = r#"{"name": "Bob", "notes": "just text", "aka": ["Bobby", "Rob"]}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();

        assert_eq!(contact.notes, Some(Notes::Text("just text".to_string())));
        assert_eq!(contact.aka, vec!["Bobby", "Rob"]);
    }

    #[test]
    fn deserialize_rejects_non_string_note() {
        let json = r#"{"name": "Bob", "notes": {"title": 42}}"#;
        assert!(serde_json::from_str::<Contact>(json).is_err());
    }
}
