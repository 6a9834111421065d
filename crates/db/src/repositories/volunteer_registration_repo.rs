//! Repository for the `volunteer_registrations` table.

use relief_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::OWNER_SELECT;
use crate::models::volunteer_registration::{
    CreateVolunteerRegistration, VolunteerRegistration, VolunteerUserRow, VolunteerWithUser,
};

const COLUMNS: &str = "id, user_id, skills, availability, preferred_location, \
                       emergency_contact, has_transportation, registered_at, \
                       created_at, updated_at";

const V_COLUMNS: &str = "v.id, v.user_id, v.skills, v.availability, v.preferred_location, \
                         v.emergency_contact, v.has_transportation, v.registered_at, \
                         v.created_at, v.updated_at";

pub struct VolunteerRegistrationRepo;

impl VolunteerRegistrationRepo {
    /// Insert a registration.
    ///
    /// A second registration for the same user fails with a unique violation
    /// on `uq_volunteer_registrations_user_id`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVolunteerRegistration,
    ) -> Result<VolunteerRegistration, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteer_registrations
                (user_id, skills, availability, preferred_location,
                 emergency_contact, has_transportation)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VolunteerRegistration>(&query)
            .bind(input.user_id)
            .bind(&input.skills)
            .bind(&input.availability)
            .bind(&input.preferred_location)
            .bind(&input.emergency_contact)
            .bind(input.has_transportation)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<VolunteerRegistration>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM volunteer_registrations WHERE user_id = $1");
        sqlx::query_as::<_, VolunteerRegistration>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Every registration with its volunteer, newest first.
    pub async fn list_with_user(pool: &PgPool) -> Result<Vec<VolunteerWithUser>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS}, {OWNER_SELECT}
             FROM volunteer_registrations v
             JOIN users u ON u.id = v.user_id
             ORDER BY v.registered_at DESC, v.id DESC"
        );
        let rows = sqlx::query_as::<_, VolunteerUserRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(VolunteerWithUser::from).collect())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM volunteer_registrations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
