//! Incident report entity model and DTOs.

use relief_core::incident::IncidentReportForm;
use relief_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::user::{OwnerColumns, UserSummary};

/// A row from the `incident_reports` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct IncidentReport {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub incident_date: Timestamp,
    pub disaster_type: String,
    pub affected_areas: String,
    pub urgency_level: String,
    pub reported_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An incident report together with the user who filed it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncidentReportWithReporter {
    #[serde(flatten)]
    pub report: IncidentReport,
    pub user: UserSummary,
}

#[derive(Debug, FromRow)]
pub(crate) struct IncidentReporterRow {
    #[sqlx(flatten)]
    pub report: IncidentReport,
    #[sqlx(flatten)]
    pub owner: OwnerColumns,
}

impl From<IncidentReporterRow> for IncidentReportWithReporter {
    fn from(row: IncidentReporterRow) -> Self {
        let user = row.owner.into_summary(row.report.user_id);
        Self {
            report: row.report,
            user,
        }
    }
}

/// DTO for inserting an incident report. `reported_at` is set by the database.
#[derive(Debug, Clone)]
pub struct CreateIncidentReport {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub incident_date: Timestamp,
    pub disaster_type: String,
    pub affected_areas: String,
    pub urgency_level: String,
}

impl CreateIncidentReport {
    /// Attribute a validated form to `user_id`.
    ///
    /// Returns `None` when the form has no incident date, which validation
    /// already rejects.
    pub fn from_form(user_id: DbId, form: &IncidentReportForm) -> Option<Self> {
        Some(Self {
            user_id,
            title: form.title.clone(),
            description: form.description.clone(),
            location: form.location.clone(),
            incident_date: form.incident_date?,
            disaster_type: form.disaster_type.clone(),
            affected_areas: form.affected_areas.clone(),
            urgency_level: form.urgency_level.clone(),
        })
    }
}
