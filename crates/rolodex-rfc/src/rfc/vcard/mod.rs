//! vCard input (RFC 6350, RFC 2426).
//!
//! Reads address book exports and maps each card onto a
//! [`Contact`](rolodex_core::contact::Contact). Only what the LDIF export
//! can use is interpreted; other properties are dropped.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::vcard::read_contacts;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Jane Doe\r\n\
//! EMAIL;TYPE=INTERNET:jane@x.com\r\n\
//! TEL;TYPE=WORK,VOICE:555-1000\r\n\
//! END:VCARD\r\n";
//!
//! let contacts = read_contacts(input).unwrap();
//! assert_eq!(contacts[0].display_name(), Some("Jane Doe"));
//! assert_eq!(contacts[0].phones[0].label, "work");
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Parsed card and parameter types
//! - [`parse`] - Unfolding, content line lexing and value splitting
//! - [`contact`] - Mapping of cards onto contacts

pub mod contact;
pub mod core;
pub mod parse;

pub use contact::{read_contacts, to_contact};
pub use core::{VCard, VCardParameter, VCardVersion};
pub use parse::{ParseError, ParseResult, parse};
