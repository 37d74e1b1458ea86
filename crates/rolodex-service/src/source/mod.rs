//! Contact sources: where the records handed to the batch driver come from.

mod json;
mod vcard;

use std::path::{Path, PathBuf};

use rolodex_core::config::InputFormat;
use rolodex_core::contact::Contact;

pub use json::JsonSource;
pub use vcard::VCardSource;

use crate::error::ExportResult;

/// An ordered, finite collection of contacts that can be read more than once.
pub trait ContactSource {
    /// ## Errors
    /// Returns an error if the underlying data cannot be read or decoded.
    fn contacts(&self) -> ExportResult<Vec<Contact>>;
}

impl ContactSource for [Contact] {
    fn contacts(&self) -> ExportResult<Vec<Contact>> {
        Ok(self.to_vec())
    }
}

impl ContactSource for Vec<Contact> {
    fn contacts(&self) -> ExportResult<Vec<Contact>> {
        self.as_slice().contacts()
    }
}

/// Returns the source reading `path` as `format`.
#[must_use]
pub fn open(path: &Path, format: InputFormat) -> Box<dyn ContactSource> {
    let path = PathBuf::from(path);
    match format {
        InputFormat::Json => Box::new(JsonSource::new(path)),
        InputFormat::Vcard => Box::new(VCardSource::new(path)),
    }
}
