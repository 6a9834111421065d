//! Repository for the `incident_reports` table.

use relief_core::types::DbId;
use sqlx::PgPool;

use crate::models::incident_report::{
    CreateIncidentReport, IncidentReport, IncidentReportWithReporter, IncidentReporterRow,
};
use crate::models::user::OWNER_SELECT;

const COLUMNS: &str = "id, user_id, title, description, location, incident_date, \
                       disaster_type, affected_areas, urgency_level, reported_at, \
                       created_at, updated_at";

const R_COLUMNS: &str = "r.id, r.user_id, r.title, r.description, r.location, r.incident_date, \
                         r.disaster_type, r.affected_areas, r.urgency_level, r.reported_at, \
                         r.created_at, r.updated_at";

pub struct IncidentReportRepo;

impl IncidentReportRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateIncidentReport,
    ) -> Result<IncidentReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO incident_reports
                (user_id, title, description, location, incident_date,
                 disaster_type, affected_areas, urgency_level)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, IncidentReport>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.location)
            .bind(input.incident_date)
            .bind(&input.disaster_type)
            .bind(&input.affected_areas)
            .bind(&input.urgency_level)
            .fetch_one(pool)
            .await
    }

    /// Find a report and its reporter by internal ID.
    pub async fn find_with_reporter(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<IncidentReportWithReporter>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}, {OWNER_SELECT}
             FROM incident_reports r
             JOIN users u ON u.id = r.user_id
             WHERE r.id = $1"
        );
        let row = sqlx::query_as::<_, IncidentReporterRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(IncidentReportWithReporter::from))
    }

    /// Reports filed by `user_id`, most recently reported first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<IncidentReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM incident_reports
             WHERE user_id = $1
             ORDER BY reported_at DESC, id DESC"
        );
        sqlx::query_as::<_, IncidentReport>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Every report with its reporter, most recently reported first.
    pub async fn list_with_reporter(
        pool: &PgPool,
    ) -> Result<Vec<IncidentReportWithReporter>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}, {OWNER_SELECT}
             FROM incident_reports r
             JOIN users u ON u.id = r.user_id
             ORDER BY r.reported_at DESC, r.id DESC"
        );
        let rows = sqlx::query_as::<_, IncidentReporterRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(IncidentReportWithReporter::from)
            .collect())
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM incident_reports")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
