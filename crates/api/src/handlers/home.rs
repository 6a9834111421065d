use axum::extract::State;
use relief_db::repositories::{DonationRepo, IncidentReportRepo, VolunteerRegistrationRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::outcome::ViewOutcome;
use crate::state::AppState;

pub const APP_NAME: &str = "Disaster Relief Coordination";

/// Public landing page totals.
#[derive(Debug, Serialize)]
pub struct HomeSummary {
    pub name: &'static str,
    pub donations: i64,
    pub incidents: i64,
    pub volunteers: i64,
}

/// GET /
pub async fn summary(State(state): State<AppState>) -> AppResult<ViewOutcome<HomeSummary>> {
    let (donations, incidents, volunteers) = tokio::try_join!(
        DonationRepo::count(&state.pool),
        IncidentReportRepo::count(&state.pool),
        VolunteerRegistrationRepo::count(&state.pool),
    )?;

    Ok(ViewOutcome::Render(HomeSummary {
        name: APP_NAME,
        donations,
        incidents,
        volunteers,
    }))
}
