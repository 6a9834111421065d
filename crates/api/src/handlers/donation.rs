//! Handlers for the `/donations` resource.
//!
//! Every action requires an authenticated caller. Creation is the only write:
//! the owner always comes from the token and the status is always `Pending`.

use axum::extract::State;
use relief_core::donation::DonationForm;
use relief_core::validation::check;
use relief_db::models::donation::{CreateDonation, Donation, DonationWithOwner};
use relief_db::repositories::DonationRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::outcome::{Route, ViewOutcome};
use crate::state::AppState;

/// GET /api/v1/donations
///
/// The caller's own donations, newest donation date first.
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<ViewOutcome<Vec<Donation>>> {
    let donations = DonationRepo::list_by_user(&state.pool, user.user_id).await?;
    Ok(ViewOutcome::Render(donations))
}

/// GET /api/v1/donations/new
pub async fn new_form(_user: AuthUser) -> ViewOutcome<DonationForm> {
    ViewOutcome::Render(DonationForm::default())
}

/// POST /api/v1/donations
///
/// A rejected form is echoed back untouched with its field errors and nothing
/// is written. A valid form becomes one `Pending` donation owned by the caller.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(form): AppJson<DonationForm>,
) -> AppResult<ViewOutcome<DonationForm>> {
    if let Err(errors) = check(&form) {
        tracing::debug!(user_id = user.user_id, %errors, "Donation form rejected");
        return Ok(ViewOutcome::Invalid {
            model: form,
            errors,
        });
    }

    let input = CreateDonation::from_form(user.user_id, &form);
    let donation = DonationRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        donation_id = donation.id,
        donation_type = %donation.donation_type,
        "Donation created"
    );

    Ok(ViewOutcome::Redirect(Route::MyDonations))
}

/// GET /api/v1/donations/all
///
/// Every donation with its donor, newest donation date first.
pub async fn list_all(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<ViewOutcome<Vec<DonationWithOwner>>> {
    let donations = DonationRepo::list_with_owner(&state.pool).await?;
    Ok(ViewOutcome::Render(donations))
}
