//! HTTP-level tests for incident reporting.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth};
use relief_db::repositories::IncidentReportRepo;
use serde_json::json;
use sqlx::PgPool;

fn flood_report(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "description": "Detailed description of the incident",
        "location": "Test Location",
        "incident_date": "2026-09-01T08:30:00Z",
        "disaster_type": "Flood",
        "affected_areas": "Test Area",
        "urgency_level": "High",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn report_persists_and_redirects_to_mine(pool: PgPool) {
    let (user, token) = common::user_with_token(&pool, "reporter").await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(app, "/api/v1/incidents", flood_report("Test Incident"), &token).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/api/v1/incidents/mine");

    let reports = IncidentReportRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "Test Incident");
    assert_eq!(reports[0].urgency_level, "High");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_report_is_rendered_back(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "reporter").await;
    let app = common::build_test_app(pool.clone());
    let mut body = flood_report("");
    body["urgency_level"] = json!("Whenever");

    let response = post_json_auth(app, "/api/v1/incidents", body, &token).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["data"]["urgency_level"], "Whenever");
    assert!(json["errors"]["title"].is_array());
    assert!(json["errors"]["urgency_level"].is_array());
    assert_eq!(IncidentReportRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listings_separate_all_from_mine(pool: PgPool) {
    let (_alice, alice_token) = common::user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = common::user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    post_json_auth(app.clone(), "/api/v1/incidents", flood_report("First"), &alice_token).await;
    post_json_auth(app.clone(), "/api/v1/incidents", flood_report("Second"), &bob_token).await;

    let all = body_json(get_auth(app.clone(), "/api/v1/incidents", &alice_token).await).await;
    let all = all["data"].as_array().unwrap().clone();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0]["title"], "Second");
    assert_eq!(all[0]["user"]["username"], "bob");

    let mine = body_json(get_auth(app, "/api/v1/incidents/mine", &alice_token).await).await;
    let mine = mine["data"].as_array().unwrap().clone();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "First");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn details_found_and_missing(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "reporter").await;
    let app = common::build_test_app(pool.clone());

    post_json_auth(app.clone(), "/api/v1/incidents", flood_report("Bridge out"), &token).await;
    let id = IncidentReportRepo::list_with_reporter(&pool).await.unwrap()[0].report.id;

    let response = get_auth(app.clone(), &format!("/api/v1/incidents/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Bridge out");
    assert_eq!(json["data"]["user"]["username"], "reporter");

    let response = get_auth(app, &format!("/api/v1/incidents/{}", id + 1000), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_id_gets_json_bad_request(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "reporter").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/incidents/bridge", &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_form_requires_auth(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "reporter").await;
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/incidents/new").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/incidents/new", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["incident_date"], json!(null));
}
