//! Handlers for the `/incidents` resource.

use axum::extract::State;
use relief_core::error::CoreError;
use relief_core::incident::IncidentReportForm;
use relief_core::types::DbId;
use relief_core::validation::check;
use relief_db::models::incident_report::{
    CreateIncidentReport, IncidentReport, IncidentReportWithReporter,
};
use relief_db::repositories::IncidentReportRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::outcome::{Route, ViewOutcome};
use crate::state::AppState;

/// GET /api/v1/incidents
pub async fn list_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<ViewOutcome<Vec<IncidentReportWithReporter>>> {
    let reports = IncidentReportRepo::list_with_reporter(&state.pool).await?;
    Ok(ViewOutcome::Render(reports))
}

/// GET /api/v1/incidents/mine
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<ViewOutcome<Vec<IncidentReport>>> {
    let reports = IncidentReportRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(ViewOutcome::Render(reports))
}

/// GET /api/v1/incidents/new
pub async fn new_form(_user: AuthUser) -> ViewOutcome<IncidentReportForm> {
    ViewOutcome::Render(IncidentReportForm::default())
}

/// POST /api/v1/incidents
pub async fn report(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(form): AppJson<IncidentReportForm>,
) -> AppResult<ViewOutcome<IncidentReportForm>> {
    if let Err(errors) = check(&form) {
        return Ok(ViewOutcome::Invalid {
            model: form,
            errors,
        });
    }

    let input = CreateIncidentReport::from_form(user.user_id, &form).ok_or_else(|| {
        AppError::InternalError("Validated incident form has no incident date".into())
    })?;
    let report = IncidentReportRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        incident_id = report.id,
        urgency = %report.urgency_level,
        "Incident reported"
    );

    Ok(ViewOutcome::Redirect(Route::MyIncidents))
}

/// GET /api/v1/incidents/{id}
pub async fn details(
    State(state): State<AppState>,
    _user: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<ViewOutcome<IncidentReportWithReporter>> {
    let report = IncidentReportRepo::find_with_reporter(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "IncidentReport",
            id,
        }))?;
    Ok(ViewOutcome::Render(report))
}
