//! Volunteer registration entity model and DTOs.

use relief_core::types::{DbId, Timestamp};
use relief_core::volunteer::VolunteerForm;
use serde::Serialize;
use sqlx::FromRow;

use super::user::{OwnerColumns, UserSummary};

/// A row from the `volunteer_registrations` table. At most one per user.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct VolunteerRegistration {
    pub id: DbId,
    pub user_id: DbId,
    pub skills: String,
    pub availability: String,
    pub preferred_location: String,
    pub emergency_contact: String,
    pub has_transportation: bool,
    pub registered_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolunteerWithUser {
    #[serde(flatten)]
    pub registration: VolunteerRegistration,
    pub user: UserSummary,
}

#[derive(Debug, FromRow)]
pub(crate) struct VolunteerUserRow {
    #[sqlx(flatten)]
    pub registration: VolunteerRegistration,
    #[sqlx(flatten)]
    pub owner: OwnerColumns,
}

impl From<VolunteerUserRow> for VolunteerWithUser {
    fn from(row: VolunteerUserRow) -> Self {
        let user = row.owner.into_summary(row.registration.user_id);
        Self {
            registration: row.registration,
            user,
        }
    }
}

/// DTO for inserting a registration. `registered_at` is set by the database.
#[derive(Debug, Clone)]
pub struct CreateVolunteerRegistration {
    pub user_id: DbId,
    pub skills: String,
    pub availability: String,
    pub preferred_location: String,
    pub emergency_contact: String,
    pub has_transportation: bool,
}

impl CreateVolunteerRegistration {
    pub fn from_form(user_id: DbId, form: &VolunteerForm) -> Self {
        Self {
            user_id,
            skills: form.skills.clone(),
            availability: form.availability.clone(),
            preferred_location: form.preferred_location.clone(),
            emergency_contact: form.emergency_contact.clone(),
            has_transportation: form.has_transportation,
        }
    }
}
