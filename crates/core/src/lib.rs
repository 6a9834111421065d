//! Domain types for the relief coordination backend.
//!
//! Nothing in this crate touches the network or the database. It holds the
//! input forms submitted by users, their structural validation rules, and the
//! shared error type.

pub mod account;
pub mod donation;
pub mod error;
pub mod incident;
pub mod types;
pub mod validation;
pub mod volunteer;
