use std::path::PathBuf;

use rolodex_core::contact::Contact;

use super::ContactSource;
use crate::error::ExportResult;

/// A JSON file holding an array of contact objects.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ## Summary
    /// Decodes a JSON array of contacts.
    ///
    /// ## Errors
    /// Returns an error if the text is not a JSON array of contact objects.
    pub fn parse(text: &str) -> ExportResult<Vec<Contact>> {
        Ok(serde_json::from_str(text)?)
    }
}

impl ContactSource for JsonSource {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn contacts(&self) -> ExportResult<Vec<Contact>> {
        let text = std::fs::read_to_string(&self.path)?;
        let contacts = Self::parse(&text)?;
        tracing::debug!(count = contacts.len(), "Read JSON contacts");
        Ok(contacts)
    }
}
