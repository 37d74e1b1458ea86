//! Batch driver: runs the transformer over an address book and writes the
//! entries out in input order.

use std::io::Write;

use rolodex_core::config::{MalformedPolicy, Settings};
use rolodex_core::contact::Contact;
use rolodex_rfc::rfc::ldif::EmitOptions;

use super::transform::{Outcome, Transformer};
use crate::error::{ExportError, ExportResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchOptions {
    pub emit: EmitOptions,
    pub on_malformed: MalformedPolicy,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            emit: EmitOptions::default(),
            on_malformed: MalformedPolicy::Abort,
        }
    }
}

impl From<&Settings> for BatchOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            emit: EmitOptions {
                base64: settings.export.base64,
            },
            on_malformed: settings.export.on_malformed,
        }
    }
}

/// A record left out of the output because it was malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the record in the input, from 0.
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

/// What happened to each record of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub written: usize,
    /// Records with neither a name nor an email address.
    pub skipped: usize,
    pub rejected: Vec<RejectedRecord>,
}

impl ExportReport {
    /// Total number of records seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.written + self.skipped + self.rejected.len()
    }
}

/// ## Summary
/// Transforms every contact and writes the resulting entries to `out`.
///
/// Entries are written as soon as they are built, so on abort everything
/// before the failing record has already reached `out`.
///
/// ## Errors
/// Returns [`ExportError::Record`] for the first malformed record when the
/// policy is [`MalformedPolicy::Abort`], or an I/O error if writing fails.
#[tracing::instrument(skip_all, fields(records = contacts.len()))]
pub fn write_ldif<W: Write>(
    contacts: &[Contact],
    out: &mut W,
    options: BatchOptions,
) -> ExportResult<ExportReport> {
    let transformer = Transformer::new(options.emit);
    let mut report = ExportReport::default();

    for (index, contact) in contacts.iter().enumerate() {
        match transformer.transform(contact) {
            Ok(Outcome::Entry(entry)) => {
                write!(out, "{entry}")?;
                report.written += 1;
            }
            Ok(Outcome::Skipped) => report.skipped += 1,
            Err(err) => match options.on_malformed {
                MalformedPolicy::Abort => {
                    return Err(ExportError::Record {
                        index,
                        source: Box::new(err),
                    });
                }
                MalformedPolicy::Skip => {
                    tracing::error!(index, error = %err, "Leaving out malformed record");
                    report.rejected.push(RejectedRecord {
                        index,
                        name: contact.display_name().map(String::from),
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    out.flush()?;

    tracing::info!(
        written = report.written,
        skipped = report.skipped,
        rejected = report.rejected.len(),
        "Export finished"
    );

    Ok(report)
}

/// ## Summary
/// Runs [`write_ldif`] into memory and returns the LDIF text with the report.
///
/// ## Errors
/// Same as [`write_ldif`].
pub fn export_to_string(
    contacts: &[Contact],
    options: BatchOptions,
) -> ExportResult<(String, ExportReport)> {
    let mut buf = Vec::new();
    let report = write_ldif(contacts, &mut buf, options)?;
    Ok((String::from_utf8_lossy(&buf).into_owned(), report))
}
