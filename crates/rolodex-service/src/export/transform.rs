//! Record transformer: one contact in, one LDIF entry (or nothing) out.

use rolodex_core::contact::{Address, Contact, Note, Notes, Phone};
use rolodex_rfc::rfc::ldif::schema::{self, AddressAttributes};
use rolodex_rfc::rfc::ldif::{EmitOptions, Emitter, Entry, EntryBuilder, escape_value};

use super::address::{AddressFields, as_fields, as_string};
use super::extract::extract_with;
use super::labels::{
    HOME_ADDRESS, NOTE_ATTRIBUTES, PHONE_ATTRIBUTES, WORK_ADDRESS, note_display_label,
};
use crate::error::{ExportError, ExportResult};

/// Label for emails beyond the second.
const OTHER_EMAILS_LABEL: &str = "Other Email Addresses";
const AKA_LABEL: &str = "AKA";

/// Result of transforming one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Entry(Entry),
    /// The record has neither a name nor an email address.
    Skipped,
}

impl Outcome {
    /// Returns the entry, if one was produced.
    #[must_use]
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            Self::Skipped => None,
        }
    }
}

/// Data with no attribute of its own, kept in encounter order for the
/// description.
#[derive(Debug, Default)]
struct Unhandled {
    items: Vec<(String, String)>,
}

impl Unhandled {
    fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    /// Free-text notes first, then one `label: value` line per item.
    fn into_description(self, free_text: Option<&str>) -> Option<String> {
        let lines: Vec<String> = free_text
            .filter(|text| !text.is_empty())
            .map(String::from)
            .into_iter()
            .chain(
                self.items
                    .into_iter()
                    .map(|(label, value)| format!("{label}: {value}")),
            )
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(lines.join("\n"))
        }
    }
}

/// Turns contacts into LDIF entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    emitter: Emitter,
}

impl Transformer {
    #[must_use]
    pub const fn new(options: EmitOptions) -> Self {
        Self {
            emitter: Emitter::new(options),
        }
    }

    /// ## Summary
    /// Builds the entry for one contact.
    ///
    /// Fields are taken in a fixed order; phones, addresses and notes that no
    /// attribute claims are written to `description` so nothing is lost.
    ///
    /// ## Errors
    /// Returns [`ExportError::MalformedItem`] if a phone, address or note is
    /// missing its label, or a phone has no number.
    #[tracing::instrument(skip_all, fields(name = contact.name.as_str()))]
    pub fn transform(&self, contact: &Contact) -> ExportResult<Outcome> {
        let mut unhandled = Unhandled::default();

        let mut emails = contact.emails.iter().map(String::as_str).filter(|e| !e.is_empty());
        let primary = emails.next();
        let secondary = emails.next();
        let other_emails: Vec<&str> = emails.collect();
        if !other_emails.is_empty() {
            unhandled.push(OTHER_EMAILS_LABEL, other_emails.join(", "));
        }

        if contact.display_name().is_none() && primary.is_none() {
            tracing::info!("Skipping record with neither a name nor an email address");
            return Ok(Outcome::Skipped);
        }

        check_items(contact)?;

        let mut entry = EntryBuilder::new();

        entry.push(Emitter::emit_pre_escaped(
            schema::DN,
            &distinguished_name(contact.display_name(), primary),
        ));
        for class in schema::OBJECT_CLASSES {
            entry.push(self.emitter.emit(schema::OBJECT_CLASS, Some(class)));
        }

        entry.push(self.emitter.emit(schema::GIVEN_NAME, contact.given_name()));
        entry.push(self.emitter.emit(schema::SURNAME, contact.surname()));
        entry.push(self.emitter.emit(schema::COMMON_NAME, contact.display_name()));
        entry.push(self.emitter.emit(schema::MAIL, primary));
        entry.push(self.emitter.emit(schema::SECOND_EMAIL, secondary));

        let mut phones = contact.phones.clone();
        for (attribute, labels) in PHONE_ATTRIBUTES {
            let (number, rest) = extract_with(labels, phones, |phone: Phone| phone.display());
            phones = rest;
            entry.push(self.emitter.emit(attribute, number.as_deref()));
        }

        let (home, addresses) = extract_with(HOME_ADDRESS, contact.addresses.clone(), |a| {
            as_fields(&a)
        });
        self.emit_address(&mut entry, &schema::HOME_ADDRESS, home.as_ref());
        let (work, addresses) = extract_with(WORK_ADDRESS, addresses, |a| as_fields(&a));
        self.emit_address(&mut entry, &schema::WORK_ADDRESS, work.as_ref());

        let (free_text, mut notes) = match &contact.notes {
            Some(Notes::Text(text)) => (Some(text.as_str()), Vec::new()),
            Some(Notes::Fields(fields)) => (None, fields.clone()),
            None => (None, Vec::new()),
        };
        for (attribute, labels) in NOTE_ATTRIBUTES {
            let (text, rest) = extract_with(labels, notes, |note: Note| note.text);
            notes = rest;
            entry.push(self.emitter.emit(attribute, text.as_deref()));
        }

        entry.push(self.emitter.emit(schema::COMPANY, contact.company()));

        collect_unhandled(&mut unhandled, contact, phones, addresses, notes);

        let description = unhandled.into_description(free_text);
        entry.push(self.emitter.emit(schema::DESCRIPTION, description.as_deref()));

        Ok(Outcome::Entry(entry.build()))
    }

    fn emit_address(
        &self,
        entry: &mut EntryBuilder,
        attributes: &AddressAttributes,
        fields: Option<&AddressFields>,
    ) {
        let Some(fields) = fields else {
            return;
        };
        entry.push(self.emitter.emit(attributes.street, fields.street.as_deref()));
        entry.push(self.emitter.emit(attributes.street2, fields.street2.as_deref()));
        entry.push(self.emitter.emit(attributes.locality, fields.city.as_deref()));
        entry.push(self.emitter.emit(attributes.state, fields.state.as_deref()));
        entry.push(
            self.emitter
                .emit(attributes.postal_code, fields.postal_code.as_deref()),
        );
        entry.push(self.emitter.emit(attributes.country, fields.country.as_deref()));
    }
}

/// Builds `cn=<name>,mail=<email>` from escaped values, leaving out a
/// missing half.
fn distinguished_name(name: Option<&str>, mail: Option<&str>) -> String {
    let cn = name.map(|name| format!("cn={}", escape_value(name)));
    let mail = mail.map(|mail| format!("mail={}", escape_value(mail)));
    cn.into_iter().chain(mail).collect::<Vec<_>>().join(",")
}

/// Adds alternate names and every phone, address and note nobody claimed.
fn collect_unhandled(
    unhandled: &mut Unhandled,
    contact: &Contact,
    phones: Vec<Phone>,
    addresses: Vec<Address>,
    notes: Vec<Note>,
) {
    let aka: Vec<&str> = contact
        .aka
        .iter()
        .map(String::as_str)
        .filter(|name| !name.is_empty())
        .collect();
    if !aka.is_empty() {
        unhandled.push(AKA_LABEL, aka.join(", "));
    }

    for phone in phones {
        unhandled.push(format!("Other Phone \"{}\"", phone.label), phone.display());
    }

    for address in addresses {
        unhandled.push(
            format!("Other Address \"{}\"", address.label),
            as_string(&address),
        );
    }

    for note in notes {
        match note_display_label(&note.label) {
            Some(label) => unhandled.push(label, note.text),
            None => tracing::debug!(label = note.label.as_str(), "Dropping bookkeeping note"),
        }
    }
}

/// Rejects items that lack the parts the transformer relies on.
fn check_items(contact: &Contact) -> ExportResult<()> {
    for phone in &contact.phones {
        if phone.label.trim().is_empty() {
            return Err(ExportError::malformed(
                "phone",
                format!("number {:?} has no label", phone.display()),
            ));
        }
        if phone.number.is_empty() {
            return Err(ExportError::malformed(
                "phone",
                format!("{:?} has no number", phone.label),
            ));
        }
    }

    if let Some(address) = contact.addresses.iter().find(|a| a.label.trim().is_empty()) {
        return Err(ExportError::malformed(
            "address",
            format!("{:?} has no label", as_string(address)),
        ));
    }

    if let Some(Notes::Fields(fields)) = &contact.notes
        && let Some(note) = fields.iter().find(|n| n.label.is_empty())
    {
        return Err(ExportError::malformed(
            "note",
            format!("{:?} has no label", note.text),
        ));
    }

    Ok(())
}
