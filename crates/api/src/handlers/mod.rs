pub mod auth;
pub mod donation;
pub mod home;
pub mod incident;
pub mod volunteer;
