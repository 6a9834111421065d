//! Handlers for the `/volunteers` resource.
//!
//! A user holds at most one volunteer registration.

use axum::extract::State;
use relief_core::error::CoreError;
use relief_core::validation::check;
use relief_core::volunteer::VolunteerForm;
use relief_db::models::volunteer_registration::{
    CreateVolunteerRegistration, VolunteerRegistration, VolunteerWithUser,
};
use relief_db::repositories::VolunteerRegistrationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::outcome::{Route, ViewOutcome};
use crate::state::AppState;

/// GET /api/v1/volunteers
pub async fn list_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<ViewOutcome<Vec<VolunteerWithUser>>> {
    let volunteers = VolunteerRegistrationRepo::list_with_user(&state.pool).await?;
    Ok(ViewOutcome::Render(volunteers))
}

/// GET /api/v1/volunteers/new
pub async fn new_form(_user: AuthUser) -> ViewOutcome<VolunteerForm> {
    ViewOutcome::Render(VolunteerForm::default())
}

/// POST /api/v1/volunteers
///
/// Returns 409 if the caller is already registered. Two racing requests are
/// settled by `uq_volunteer_registrations_user_id`, which also maps to 409.
pub async fn register(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(form): AppJson<VolunteerForm>,
) -> AppResult<ViewOutcome<VolunteerForm>> {
    if let Err(errors) = check(&form) {
        return Ok(ViewOutcome::Invalid {
            model: form,
            errors,
        });
    }

    if VolunteerRegistrationRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "You are already registered as a volunteer".into(),
        )));
    }

    let input = CreateVolunteerRegistration::from_form(user.user_id, &form);
    let registration = VolunteerRegistrationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        registration_id = registration.id,
        "Volunteer registered"
    );

    Ok(ViewOutcome::Redirect(Route::MyVolunteerRegistration))
}

/// GET /api/v1/volunteers/me
pub async fn my_registration(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<ViewOutcome<VolunteerRegistration>> {
    let registration = VolunteerRegistrationRepo::find_by_user(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFoundForUser {
            entity: "VolunteerRegistration",
            user_id: user.user_id,
        }))?;
    Ok(ViewOutcome::Render(registration))
}
