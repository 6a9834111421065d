//! Row structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - Where listings need it, a joined view carrying the owning user

pub mod donation;
pub mod incident_report;
pub mod session;
pub mod user;
pub mod volunteer_registration;
