pub mod ldif;
pub mod vcard;
