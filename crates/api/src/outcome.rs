//! What a workflow hands back to the presentation layer.
//!
//! Workflows never build HTTP responses themselves. They return a
//! [`ViewOutcome`]: render a model, re-render a rejected form with its field
//! errors, or redirect to a named route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use relief_core::validation::FieldErrors;
use serde::Serialize;

use crate::response::{DataResponse, InvalidFormResponse};

/// Named destinations a workflow may redirect to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    MyDonations,
    MyIncidents,
    MyVolunteerRegistration,
}

impl Route {
    /// Absolute request path of the route.
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/api/v1/auth/login",
            Route::MyDonations => "/api/v1/donations",
            Route::MyIncidents => "/api/v1/incidents/mine",
            Route::MyVolunteerRegistration => "/api/v1/volunteers/me",
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ViewOutcome<T> {
    /// 200 with `{ "data": model }`.
    Render(T),
    /// 422 with the submitted form echoed back next to its field errors.
    Invalid { model: T, errors: FieldErrors },
    /// 303 See Other pointing at the route.
    Redirect(Route),
}

impl<T: Serialize> IntoResponse for ViewOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            ViewOutcome::Render(data) => (StatusCode::OK, Json(DataResponse { data })).into_response(),
            ViewOutcome::Invalid { model, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(InvalidFormResponse {
                    data: model,
                    errors,
                    code: "VALIDATION_ERROR",
                }),
            )
                .into_response(),
            ViewOutcome::Redirect(route) => Redirect::to(route.path()).into_response(),
        }
    }
}
