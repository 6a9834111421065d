//! Incident reporting form and urgency levels.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::Timestamp;

/// Accepted values for `urgency_level`, least to most urgent.
pub const URGENCY_LEVELS: &[&str] = &["Low", "Medium", "High", "Critical"];

/// A disaster incident reported from the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct IncidentReportForm {
    #[validate(length(min = 1, max = 200, message = "Title is required (max 200 characters)"))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 2000,
        message = "Description is required (max 2000 characters)"
    ))]
    pub description: String,

    #[validate(length(min = 1, max = 200, message = "Location is required (max 200 characters)"))]
    pub location: String,

    #[validate(required(message = "Incident date is required"))]
    pub incident_date: Option<Timestamp>,

    #[validate(length(
        min = 1,
        max = 50,
        message = "Disaster type is required (max 50 characters)"
    ))]
    pub disaster_type: String,

    #[validate(length(
        min = 1,
        max = 500,
        message = "Affected areas are required (max 500 characters)"
    ))]
    pub affected_areas: String,

    #[validate(custom(function = "validate_urgency_level"))]
    pub urgency_level: String,
}

fn validate_urgency_level(value: &str) -> Result<(), ValidationError> {
    if URGENCY_LEVELS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("urgency_level")
            .with_message("Urgency level must be one of Low, Medium, High, Critical".into()))
    }
}
