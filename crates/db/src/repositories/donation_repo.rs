//! Repository for the `donations` table.

use relief_core::donation::DonationStatus;
use relief_core::types::DbId;
use sqlx::PgPool;

use crate::models::donation::{CreateDonation, Donation, DonationOwnerRow, DonationWithOwner};
use crate::models::user::OWNER_SELECT;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, donation_type, item_description, quantity, unit, \
                       donation_date, target_area, special_instructions, status, \
                       created_at, updated_at";

/// [`COLUMNS`] qualified with the `d` alias for joined queries.
const D_COLUMNS: &str = "d.id, d.user_id, d.donation_type, d.item_description, d.quantity, \
                         d.unit, d.donation_date, d.target_area, d.special_instructions, \
                         d.status, d.created_at, d.updated_at";

/// Newest first; `id` breaks ties so repeated reads return the same order.
const NEWEST_FIRST: &str = "donation_date DESC, id DESC";

/// Provides donation inserts and listings.
pub struct DonationRepo;

impl DonationRepo {
    /// Insert a donation with status `Pending`, returning the created row.
    ///
    /// `donation_date` falls back to `NOW()` when the input leaves it unset.
    pub async fn create(pool: &PgPool, input: &CreateDonation) -> Result<Donation, sqlx::Error> {
        let query = format!(
            "INSERT INTO donations
                (user_id, donation_type, item_description, quantity, unit,
                 donation_date, target_area, special_instructions, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, NOW()), $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(input.user_id)
            .bind(&input.donation_type)
            .bind(&input.item_description)
            .bind(input.quantity)
            .bind(&input.unit)
            .bind(input.donation_date)
            .bind(&input.target_area)
            .bind(&input.special_instructions)
            .bind(DonationStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a donation by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Donation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM donations WHERE id = $1");
        sqlx::query_as::<_, Donation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All donations made by `user_id`, newest first.
    ///
    /// An unknown user simply has no donations.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Donation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM donations WHERE user_id = $1 ORDER BY {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, Donation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Every donation with its owner, ordered by `donation_date` descending.
    pub async fn list_with_owner(pool: &PgPool) -> Result<Vec<DonationWithOwner>, sqlx::Error> {
        let query = format!(
            "SELECT {D_COLUMNS}, {OWNER_SELECT}
             FROM donations d
             JOIN users u ON u.id = d.user_id
             ORDER BY d.donation_date DESC, d.id DESC"
        );
        let rows = sqlx::query_as::<_, DonationOwnerRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(DonationWithOwner::from).collect())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM donations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
