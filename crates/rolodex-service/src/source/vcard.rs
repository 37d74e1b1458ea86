use std::path::PathBuf;

use rolodex_core::contact::Contact;
use rolodex_rfc::rfc::vcard::read_contacts;

use super::ContactSource;
use crate::error::ExportResult;

/// A vCard file with one or more cards.
#[derive(Debug, Clone)]
pub struct VCardSource {
    path: PathBuf,
}

impl VCardSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactSource for VCardSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn contacts(&self) -> ExportResult<Vec<Contact>> {
        let text = std::fs::read_to_string(&self.path)?;
        let contacts = read_contacts(&text)?;
        tracing::debug!(count = contacts.len(), "Read vCard contacts");
        Ok(contacts)
    }
}
