//! Postal address formatting.

use rolodex_core::contact::Address;

/// Country value some address books fill in by default. It never names a
/// real country and is left out of the country attribute.
pub const BOGUS_COUNTRY: &str = "Emacs";

/// An address split over the six address attributes of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressFields {
    pub street: Option<String>,
    /// Street lines after the first, joined with ", ".
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Splits an address into discrete fields.
#[must_use]
pub fn as_fields(address: &Address) -> AddressFields {
    let (first, rest) = match address.streets.split_first() {
        Some((first, rest)) => (Some(first), rest),
        None => (None, &[][..]),
    };

    AddressFields {
        street: first.filter(|s| !s.is_empty()).cloned(),
        street2: (!rest.is_empty()).then(|| rest.join(", ")),
        city: address.city().map(String::from),
        state: address.state().map(String::from),
        postal_code: address.postal_code().map(String::from),
        country: Some(address.country.as_str())
            .filter(|c| !c.is_empty() && *c != BOGUS_COUNTRY)
            .map(String::from),
    }
}

/// Formats an address as a single line: every non-empty component joined
/// with ", ".
#[must_use]
pub fn as_string(address: &Address) -> String {
    address
        .streets
        .iter()
        .chain([
            &address.city,
            &address.state,
            &address.postal_code,
            &address.country,
        ])
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield() -> Address {
        Address {
            label: "home".to_string(),
            streets: vec![
                "1 Main St".to_string(),
                "Apt 4".to_string(),
                "Rear".to_string(),
            ],
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country: "USA".to_string(),
        }
    }

    #[test]
    fn fields_of_full_address() {
        let fields = as_fields(&springfield());
        assert_eq!(
            fields,
            AddressFields {
                street: Some("1 Main St".to_string()),
                street2: Some("Apt 4, Rear".to_string()),
                city: Some("Springfield".to_string()),
                state: Some("IL".to_string()),
                postal_code: Some("62701".to_string()),
                country: Some("USA".to_string()),
            }
        );
    }

    #[test]
    fn single_street_has_no_second_line() {
        let address = Address {
            streets: vec!["1 Main St".to_string()],
            ..Address::new("work")
        };
        let fields = as_fields(&address);
        assert_eq!(fields.street.as_deref(), Some("1 Main St"));
        assert_eq!(fields.street2, None);
        assert_eq!(fields.city, None);
    }

    #[test]
    fn bogus_or_empty_country_is_dropped() {
        let mut address = springfield();
        address.country = BOGUS_COUNTRY.to_string();
        assert_eq!(as_fields(&address).country, None);

        address.country = String::new();
        assert_eq!(as_fields(&address).country, None);

        // Only the exact value is special
        address.country = "emacs".to_string();
        assert_eq!(as_fields(&address).country.as_deref(), Some("emacs"));
    }

    #[test]
    fn empty_address_has_no_fields() {
        assert_eq!(as_fields(&Address::new("home")), AddressFields::default());
        assert_eq!(as_string(&Address::new("home")), "");
    }

    #[test]
    fn one_line_skips_empty_parts() {
        let mut address = springfield();
        address.state = String::new();
        assert_eq!(
            as_string(&address),
            "1 Main St, Apt 4, Rear, Springfield, 62701, USA"
        );
    }
}
