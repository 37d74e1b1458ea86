use thiserror::Error;

use crate::rfc::vcard::parse::ParseError;

/// Errors raised while reading or writing one of the supported formats.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("vCard parse error: {0}")]
    VCardParse(#[from] ParseError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
