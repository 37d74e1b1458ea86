//! Wire formats for rolodex: LDIF output (RFC 2849, with attribute values
//! escaped per the RFC 4514 string grammar) and vCard input (RFC 6350 and
//! RFC 2426).

pub mod error;
pub mod rfc;
