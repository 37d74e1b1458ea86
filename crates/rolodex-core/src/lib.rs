//! Shared types for the rolodex workspace: the contact model read from an
//! address book and the layered configuration.

pub mod config;
pub mod constants;
pub mod contact;
