//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Every method issues a single
//! statement, so each write commits atomically on its own.

pub mod donation_repo;
pub mod incident_report_repo;
pub mod session_repo;
pub mod user_repo;
pub mod volunteer_registration_repo;

pub use donation_repo::DonationRepo;
pub use incident_report_repo::IncidentReportRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use volunteer_registration_repo::VolunteerRegistrationRepo;
