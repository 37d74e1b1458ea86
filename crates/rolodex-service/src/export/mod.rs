//! Record export pipeline.
//!
//! A contact flows through [`transform::Transformer`], which peels known
//! fields off the record with [`extract`], formats addresses with
//! [`address`], and routes everything left over into the `description`
//! attribute. [`batch`] runs the transformer over a whole address book.

pub mod address;
pub mod batch;
pub mod extract;
pub mod labels;
pub mod transform;

pub use batch::{BatchOptions, ExportReport, RejectedRecord, export_to_string, write_ldif};
pub use transform::{Outcome, Transformer};
