//! Mapping of parsed vCards onto contacts.
//!
//! Phone and address labels come from TYPE parameters. Properties without a
//! contact field of their own (TITLE, URL, BDAY, X- extensions...) become
//! labeled notes so that the export can still place or preserve them.

use rolodex_core::contact::{Address, Contact, Note, Notes, Phone};

use super::core::VCard;
use super::parse::{ContentLine, parse, split_component, split_structured, unescape_text};
use crate::error::RfcResult;

/// TYPE values that say something about the medium, not the location.
const NON_LOCATION_TYPES: &[&str] = &[
    "voice", "pref", "text", "msg", "video", "textphone", "internet", "x400", "dom", "intl",
    "postal", "parcel", "bbs", "modem", "car", "isdn", "pcs", "quoted-printable",
];

/// TYPE values naming a kind of phone, preferred over a location label.
const DEVICE_TYPES: &[&str] = &["fax", "pager", "cell", "mobile"];

/// Label used when a property carries no usable TYPE.
const DEFAULT_LABEL: &str = "other";

/// Note label for free-text NOTE properties.
const NOTES_LABEL: &str = "notes";

/// Parses a vCard document and maps every card to a contact.
///
/// ## Errors
/// Returns an error if the document cannot be parsed.
pub fn read_contacts(input: &str) -> RfcResult<Vec<Contact>> {
    let cards = parse(input)?;
    Ok(cards.iter().map(to_contact).collect())
}

/// Maps one vCard onto a contact.
#[must_use]
pub fn to_contact(card: &VCard) -> Contact {
    let mut contact = Contact::default();
    let mut notes: Vec<Note> = Vec::new();
    tracing::trace!(
        version = card.version.as_str(),
        properties = card.properties.len(),
        "Mapping vCard"
    );

    for prop in &card.properties {
        match prop.name.as_str() {
            "FN" => contact.name = unescape_text(&prop.value),
            "N" => {
                let parts = split_structured(&prop.value);
                contact.surname = component(&parts, 0).join(" ");
                contact.given_name = component(&parts, 1).join(" ");
            }
            "EMAIL" => push_non_empty(&mut contact.emails, unescape_text(&prop.value)),
            "TEL" => {
                let number = strip_scheme(&unescape_text(&prop.value), "tel:");
                if number.trim().is_empty() {
                    tracing::debug!("Dropping TEL without a number");
                } else {
                    contact.phones.push(Phone::new(phone_label(prop), number));
                }
            }
            "ADR" => contact.addresses.push(address(prop)),
            "ORG" => {
                let parts = split_structured(&prop.value);
                contact.company = unescape_text(parts.first().copied().unwrap_or_default());
                let units: Vec<String> = parts[1..]
                    .iter()
                    .map(|unit| unescape_text(unit))
                    .filter(|unit| !unit.is_empty())
                    .collect();
                if !units.is_empty() {
                    notes.push(Note::new("department", units.join(", ")));
                }
            }
            "NICKNAME" => contact.aka.extend(
                split_component(&prop.value)
                    .into_iter()
                    .filter(|nick| !nick.is_empty()),
            ),
            "NOTE" => notes.push(Note::new(NOTES_LABEL, unescape_text(&prop.value))),
            "TITLE" => notes.push(Note::new("title", unescape_text(&prop.value))),
            "ROLE" => notes.push(Note::new("role", unescape_text(&prop.value))),
            "URL" => notes.push(Note::new("www", unescape_text(&prop.value))),
            "BDAY" => notes.push(Note::new("birthday", unescape_text(&prop.value))),
            "ANNIVERSARY" => notes.push(Note::new("anniversary", unescape_text(&prop.value))),
            "REV" => notes.push(Note::new("timestamp", prop.value.clone())),
            "X-AIM" => notes.push(Note::new("aim", unescape_text(&prop.value))),
            "IMPP" => {
                let handle = unescape_text(&prop.value);
                if handle.to_ascii_lowercase().starts_with("aim:") {
                    notes.push(Note::new("aim", strip_scheme(&handle, "aim:")));
                } else {
                    notes.push(Note::new("impp", handle));
                }
            }
            name if name.starts_with("X-") => notes.push(Note::new(
                name[2..].to_ascii_lowercase(),
                unescape_text(&prop.value),
            )),
            other => tracing::trace!(property = other, "Ignoring vCard property"),
        }
    }

    contact.notes = collect_notes(notes);
    contact
}

/// Plain NOTE text stays free text; anything else makes the notes a mapping.
fn collect_notes(notes: Vec<Note>) -> Option<Notes> {
    if notes.is_empty() {
        None
    } else if notes.iter().all(|n| n.label == NOTES_LABEL) {
        let text: Vec<String> = notes.into_iter().map(|n| n.text).collect();
        Some(Notes::Text(text.join("\n")))
    } else {
        Some(Notes::Fields(notes))
    }
}

fn phone_label(prop: &ContentLine) -> String {
    DEVICE_TYPES
        .iter()
        .find(|device| prop.has_type(device))
        .map_or_else(|| location_label(prop), |device| (*device).to_string())
}

fn location_label(prop: &ContentLine) -> String {
    prop.type_values()
        .into_iter()
        .find(|t| !NON_LOCATION_TYPES.iter().any(|n| t.eq_ignore_ascii_case(n)))
        .map_or_else(|| DEFAULT_LABEL.to_string(), str::to_ascii_lowercase)
}

/// ADR components: PO box; extended; street; locality; region; postal code;
/// country. The first three become street lines.
fn address(prop: &ContentLine) -> Address {
    let parts = split_structured(&prop.value);

    let streets = (0..3)
        .flat_map(|i| component(&parts, i))
        .flat_map(|part| {
            part.split('\n')
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect();

    Address {
        label: location_label(prop),
        streets,
        city: component(&parts, 3).join(" "),
        state: component(&parts, 4).join(" "),
        postal_code: component(&parts, 5).join(" "),
        country: component(&parts, 6).join(" "),
    }
}

fn component(parts: &[&str], index: usize) -> Vec<String> {
    parts
        .get(index)
        .map(|part| split_component(part))
        .unwrap_or_default()
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect()
}

fn strip_scheme(value: &str, scheme: &str) -> String {
    match value.get(..scheme.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(scheme) => value[scheme.len()..].to_string(),
        _ => value.to_string(),
    }
}

fn push_non_empty(values: &mut Vec<String>, value: String) {
    if !value.is_empty() {
        values.push(value);
    }
}
