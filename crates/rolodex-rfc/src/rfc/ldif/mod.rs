//! LDIF output (RFC 2849).
//!
//! This module turns attribute/value pairs into LDIF content lines for the
//! Mozilla address book schema.
//!
//! ## Usage
//!
//! ```rust
//! use rolodex_rfc::rfc::ldif::{EmitOptions, Emitter, EntryBuilder};
//!
//! let emitter = Emitter::new(EmitOptions::default());
//! let mut entry = EntryBuilder::new();
//! entry.push(Emitter::emit_pre_escaped("dn", "cn=Jane Doe,mail=jane@x.com"));
//! entry.push(emitter.emit("cn", Some("Jane Doe")));
//! entry.push(emitter.emit("description", Some("line one\nline two")));
//!
//! let text = entry.build().to_string();
//! assert!(text.starts_with("dn: cn=Jane Doe,mail=jane@x.com\n"));
//! assert!(text.contains("description:: "));
//! assert!(text.ends_with("\n\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`escape`] - Attribute value escaping
//! - [`emit`] - Attribute emitter, content lines and entries
//! - [`schema`] - Attribute names and object classes of the target schema

pub mod emit;
pub mod escape;
pub mod schema;

pub use emit::{EmitOptions, Emitter, Entry, EntryBuilder, LdifLine, LineValue};
pub use escape::escape_value;
