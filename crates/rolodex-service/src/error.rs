use rolodex_rfc::error::RfcError;
use thiserror::Error;

/// Errors raised while exporting contacts.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A record item does not have the shape the transformer relies on.
    #[error("Malformed {kind}: {reason}")]
    MalformedItem { kind: &'static str, reason: String },

    /// A record failed and the batch was aborted.
    #[error("Record {index} failed: {source}")]
    Record {
        index: usize,
        #[source]
        source: Box<ExportError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Rfc(#[from] RfcError),
}

impl ExportError {
    #[must_use]
    pub fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedItem {
            kind,
            reason: reason.into(),
        }
    }
}

pub type ExportResult<T> = std::result::Result<T, ExportError>;
