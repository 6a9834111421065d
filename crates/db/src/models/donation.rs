//! Donation entity model and DTOs.

use relief_core::donation::{DonationForm, DonationStatus};
use relief_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::user::{OwnerColumns, UserSummary};

/// A row from the `donations` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Donation {
    pub id: DbId,
    pub user_id: DbId,
    pub donation_type: String,
    pub item_description: String,
    pub quantity: i32,
    pub unit: String,
    pub donation_date: Timestamp,
    pub target_area: String,
    pub special_instructions: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Donation {
    /// Parse the stored status text.
    pub fn parsed_status(&self) -> Result<DonationStatus, String> {
        self.status.parse()
    }
}

/// A donation together with the user who made it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationWithOwner {
    #[serde(flatten)]
    pub donation: Donation,
    pub user: UserSummary,
}

#[derive(Debug, FromRow)]
pub(crate) struct DonationOwnerRow {
    #[sqlx(flatten)]
    pub donation: Donation,
    #[sqlx(flatten)]
    pub owner: OwnerColumns,
}

impl From<DonationOwnerRow> for DonationWithOwner {
    fn from(row: DonationOwnerRow) -> Self {
        let user = row.owner.into_summary(row.donation.user_id);
        Self {
            donation: row.donation,
            user,
        }
    }
}

/// DTO for inserting a donation.
///
/// Carries no status: every insert is written as [`DonationStatus::Pending`].
#[derive(Debug, Clone)]
pub struct CreateDonation {
    pub user_id: DbId,
    pub donation_type: String,
    pub item_description: String,
    pub quantity: i32,
    pub unit: String,
    /// `None` lets the database default to `NOW()`.
    pub donation_date: Option<Timestamp>,
    pub target_area: String,
    pub special_instructions: Option<String>,
}

impl CreateDonation {
    /// Attribute a validated form to `user_id`.
    pub fn from_form(user_id: DbId, form: &DonationForm) -> Self {
        Self {
            user_id,
            donation_type: form.donation_type.clone(),
            item_description: form.item_description.clone(),
            quantity: form.quantity,
            unit: form.unit.clone(),
            donation_date: form.donation_date,
            target_area: form.target_area.clone(),
            special_instructions: form.special_instructions.clone(),
        }
    }
}
