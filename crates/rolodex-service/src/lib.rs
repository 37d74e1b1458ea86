//! Contact export: maps address book records onto Mozilla LDIF entries.
//!
//! - [`export`] - extraction, address formatting, the record transformer and
//!   the batch driver
//! - [`source`] - where contact records come from

pub mod error;
pub mod export;
pub mod source;
