//! Attribute names of the Mozilla address book LDIF schema.
//!
//! Names are case-sensitive on import and must be written exactly as below.

/// Object classes declared on every entry, in output order.
pub const OBJECT_CLASSES: [&str; 5] = [
    "top",
    "person",
    "organizationalPerson",
    "inetOrgPerson",
    "mozillaAbPersonAlpha",
];

pub const DN: &str = "dn";
pub const OBJECT_CLASS: &str = "objectclass";

// Name and mail
pub const GIVEN_NAME: &str = "givenName";
pub const SURNAME: &str = "sn";
pub const COMMON_NAME: &str = "cn";
pub const MAIL: &str = "mail";
pub const SECOND_EMAIL: &str = "mozillaSecondEmail";
pub const AIM_ID: &str = "nsAIMid";

// Phones
pub const WORK_PHONE: &str = "telephoneNumber";
pub const HOME_PHONE: &str = "homePhone";
pub const FAX: &str = "fax";
pub const PAGER: &str = "pager";
pub const MOBILE: &str = "mobile";

// Organization
pub const TITLE: &str = "title";
pub const DEPARTMENT: &str = "department";
pub const COMPANY: &str = "company";

pub const HOME_URL: &str = "mozillaHomeUrl";
pub const DESCRIPTION: &str = "description";

/// Attribute names for the six parts of a postal address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressAttributes {
    pub street: &'static str,
    pub street2: &'static str,
    pub locality: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
    pub country: &'static str,
}

pub const HOME_ADDRESS: AddressAttributes = AddressAttributes {
    street: "homeStreet",
    street2: "mozillaHomeStreet2",
    locality: "mozillaHomeLocalityName",
    state: "mozillaHomeState",
    postal_code: "mozillaHomePostalCode",
    country: "mozillaHomeCountryName",
};

pub const WORK_ADDRESS: AddressAttributes = AddressAttributes {
    street: "street",
    street2: "mozillaWorkStreet2",
    locality: "l",
    state: "st",
    postal_code: "postalCode",
    country: "c",
};
