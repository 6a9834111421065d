//! Volunteer sign-up form.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VolunteerForm {
    #[validate(length(min = 1, max = 500, message = "Skills are required (max 500 characters)"))]
    pub skills: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Availability is required (max 200 characters)"
    ))]
    pub availability: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Preferred location is required (max 200 characters)"
    ))]
    pub preferred_location: String,

    #[validate(length(
        min = 1,
        max = 200,
        message = "Emergency contact is required (max 200 characters)"
    ))]
    pub emergency_contact: String,

    pub has_transportation: bool,
}
