//! Parsed vCard types.

mod card;
mod parameter;

pub use card::{VCard, VCardVersion};
pub use parameter::VCardParameter;
