//! vCard wrapper type.

use crate::rfc::vcard::parse::ContentLine;

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 2.1 (bare parameters, quoted-printable).
    V21,
    /// vCard 3.0 (RFC 2426).
    #[default]
    V3,
    /// vCard 4.0 (RFC 6350).
    V4,
}

impl VCardVersion {
    /// Parses from version string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "2.1" => Some(Self::V21),
            "3.0" => Some(Self::V3),
            "4.0" => Some(Self::V4),
            _ => None,
        }
    }

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V3 => "3.0",
            Self::V4 => "4.0",
        }
    }
}

/// A parsed vCard: its version and content lines in order of appearance.
#[derive(Debug, Clone, Default)]
pub struct VCard {
    pub version: VCardVersion,
    pub properties: Vec<ContentLine>,
}

impl VCard {
    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&ContentLine> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_round_trip() {
        for v in ["2.1", "3.0", "4.0"] {
            assert_eq!(VCardVersion::parse(v).map(VCardVersion::as_str), Some(v));
        }
        assert_eq!(VCardVersion::parse("5.0"), None);
    }
}
