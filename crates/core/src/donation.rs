//! Donation intake: the submitted form and the lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Timestamp;

/// Lifecycle status stored in `donations.status`.
///
/// New donations always start as [`DonationStatus::Pending`]; the later
/// states are set by administrative tooling outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DonationStatus {
    Pending,
    Received,
    Distributed,
    Cancelled,
}

impl DonationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Received => "Received",
            Self::Distributed => "Distributed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Received" => Ok(Self::Received),
            "Distributed" => Ok(Self::Distributed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown donation status '{other}'")),
        }
    }
}

/// Donation details submitted by a signed-in user.
///
/// There is no `status` field: any status in the request body is
/// dropped during deserialization and the store writes `Pending`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DonationForm {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Donation type is required (max 50 characters)"
    ))]
    pub donation_type: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Item description is required (max 500 characters)"
    ))]
    pub item_description: String,

    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i32,

    #[validate(length(max = 20, message = "Unit must be at most 20 characters"))]
    pub unit: String,

    #[validate(length(
        max = 200,
        message = "Target area must be at most 200 characters"
    ))]
    pub target_area: String,

    #[validate(length(
        max = 1000,
        message = "Special instructions must be at most 1000 characters"
    ))]
    pub special_instructions: Option<String>,

    /// When the goods are handed over. Defaults to the time of submission.
    pub donation_date: Option<Timestamp>,
}
