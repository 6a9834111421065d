//! HTTP-level and handler-level tests for the donation workflow.

mod common;

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use chrono::{Duration, SecondsFormat, Utc};
use common::{body_json, get, get_auth, post_json, post_json_auth};
use relief_api::extract::AppJson;
use relief_api::handlers::donation;
use relief_api::middleware::auth::AuthUser;
use relief_api::outcome::{Route, ViewOutcome};
use relief_core::donation::DonationForm;
use relief_db::repositories::DonationRepo;
use serde_json::json;
use sqlx::PgPool;

fn medical_kits() -> serde_json::Value {
    json!({
        "donation_type": "Medical",
        "item_description": "First aid kits",
        "quantity": 15,
        "unit": "kits",
        "target_area": "Flood affected region",
        "special_instructions": "Urgent - needed by Friday",
        "donation_date": null,
    })
}

fn dated(kind: &str, item: &str, days_ago: i64) -> serde_json::Value {
    let date = (Utc::now() - Duration::days(days_ago)).to_rfc3339_opts(SecondsFormat::Secs, true);
    json!({
        "donation_type": kind,
        "item_description": item,
        "quantity": 10,
        "unit": "pieces",
        "target_area": "Local",
        "donation_date": date,
    })
}

fn auth_user(user: &relief_db::models::user::User) -> AuthUser {
    AuthUser {
        user_id: user.id,
        username: user.username.clone(),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_persists_pending_donation_and_redirects(pool: PgPool) {
    let (user, token) = common::user_with_token(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());

    let response = post_json_auth(app, "/api/v1/donations", medical_kits(), &token).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[LOCATION], "/api/v1/donations");

    let stored = DonationRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    let donation = &stored[0];
    assert_eq!(donation.user_id, user.id);
    assert_eq!(donation.donation_type, "Medical");
    assert_eq!(donation.item_description, "First aid kits");
    assert_eq!(donation.quantity, 15);
    assert_eq!(donation.unit, "kits");
    assert_eq!(donation.target_area, "Flood affected region");
    assert_eq!(donation.status, "Pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_ignores_status_in_body(pool: PgPool) {
    let (user, token) = common::user_with_token(&pool, "sneaky").await;
    let app = common::build_test_app(pool.clone());
    let mut body = medical_kits();
    body["status"] = json!("Distributed");
    body["user_id"] = json!(9999);

    let response = post_json_auth(app, "/api/v1/donations", body, &token).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let stored = DonationRepo::list_by_user(&pool, user.id).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, "Pending");
    assert_eq!(DonationRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_form_is_echoed_verbatim_and_nothing_is_stored(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "testuser").await;
    let app = common::build_test_app(pool.clone());
    let input = json!({
        "donation_type": "",
        "item_description": "Test items",
        "quantity": 0,
        "unit": "pieces",
        "target_area": "Test Area",
        "special_instructions": null,
        "donation_date": null,
    });

    let response = post_json_auth(app, "/api/v1/donations", input.clone(), &token).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["data"], input);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["errors"]["donation_type"].is_array());
    assert_eq!(
        json["errors"]["quantity"][0],
        "Quantity must be greater than 0"
    );
    assert_eq!(DonationRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_token_returns_401_and_stores_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/donations", medical_kits()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(DonationRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mistyped_quantity_gets_json_error_and_stores_nothing(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "typo").await;
    let app = common::build_test_app(pool.clone());

    for quantity in [json!("abc"), json!(1.5), json!(3_000_000_000_i64)] {
        let mut body = medical_kits();
        body["quantity"] = quantity.clone();

        let response = post_json_auth(app.clone(), "/api/v1/donations", body, &token).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY, "{quantity}");
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["error"].as_str().unwrap().contains("quantity"));
    }
    assert_eq!(DonationRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn handler_returns_invalid_outcome_with_original_model(pool: PgPool) {
    let user = common::create_test_user(&pool, "direct").await;
    let form = DonationForm {
        donation_type: String::new(),
        item_description: "Test items".into(),
        quantity: 0,
        unit: "pieces".into(),
        target_area: "Test Area".into(),
        special_instructions: None,
        donation_date: None,
    };

    let outcome = donation::create(
        State(common::test_state(pool.clone())),
        auth_user(&user),
        AppJson(form.clone()),
    )
    .await
    .unwrap();

    assert_matches!(outcome, ViewOutcome::Invalid { model, errors } => {
        assert_eq!(model, form);
        assert!(errors.contains("donation_type"));
        assert!(errors.contains("quantity"));
    });
    assert_eq!(DonationRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn handler_redirects_to_my_donations(pool: PgPool) {
    let user = common::create_test_user(&pool, "direct").await;
    let form: DonationForm = serde_json::from_value(medical_kits()).unwrap();

    let outcome = donation::create(
        State(common::test_state(pool.clone())),
        auth_user(&user),
        AppJson(form),
    )
    .await
    .unwrap();

    assert_eq!(outcome, ViewOutcome::Redirect(Route::MyDonations));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_form_renders_blank_form(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "former").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/donations/new", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["donation_type"], "");
    assert_eq!(json["data"]["quantity"], 0);
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_mine_returns_only_callers_donations(pool: PgPool) {
    let (_alice, alice_token) = common::user_with_token(&pool, "alice").await;
    let (_bob, bob_token) = common::user_with_token(&pool, "bob").await;
    let app = common::build_test_app(pool);

    for body in [dated("Food", "Old item", 1), dated("Clothes", "New item", 0)] {
        let response = post_json_auth(app.clone(), "/api/v1/donations", body, &alice_token).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
    let response = post_json_auth(
        app.clone(),
        "/api/v1/donations",
        dated("Water", "Bob's item", 0),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = get_auth(app.clone(), "/api/v1/donations", &alice_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["item_description"], "New item");
    assert_eq!(items[1]["item_description"], "Old item");

    // Repeated reads without writes are identical.
    let again = body_json(get_auth(app, "/api/v1/donations", &alice_token).await).await;
    assert_eq!(again, json);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_mine_is_empty_for_user_without_donations(pool: PgPool) {
    let (_user, token) = common::user_with_token(&pool, "newcomer").await;
    let app = common::build_test_app(pool);

    let json = body_json(get_auth(app, "/api/v1/donations", &token).await).await;

    assert_eq!(json["data"], json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_all_is_newest_first_with_owners(pool: PgPool) {
    let (_user1, token1) = common::user_with_token(&pool, "user1").await;
    let (_user2, token2) = common::user_with_token(&pool, "user2").await;
    let app = common::build_test_app(pool);

    for (body, token) in [
        (dated("Food", "Oldest", 2), &token1),
        (dated("Clothes", "Middle", 1), &token2),
        (dated("Water", "Newest", 0), &token1),
    ] {
        let response = post_json_auth(app.clone(), "/api/v1/donations", body, token).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = get_auth(app, "/api/v1/donations/all", &token2).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();

    let order: Vec<_> = items
        .iter()
        .map(|d| d["item_description"].as_str().unwrap())
        .collect();
    assert_eq!(order, ["Newest", "Middle", "Oldest"]);

    assert_eq!(items[0]["user"]["username"], "user1");
    assert_eq!(items[1]["user"]["username"], "user2");
    assert_eq!(items[2]["user"]["username"], "user1");
    assert_eq!(items[1]["user"]["email"], "user2@test.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listings_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    for uri in ["/api/v1/donations", "/api/v1/donations/all", "/api/v1/donations/new"] {
        let response = get(app.clone(), uri).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
    }
}
