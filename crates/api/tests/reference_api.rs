//! Integration tests for reference data (categories, departments) and
//! profile management.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /api/v1/categories
// ---------------------------------------------------------------------------

/// The seeded complaint categories are served with their keyword lists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn list_categories_returns_seeded_set(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let categories = json["data"].as_array().unwrap();
    let names: Vec<&str> = categories
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"pothole"));
    assert!(names.contains(&"garbage_overflow"));
    assert!(names.contains(&"broken_street_light"));

    // Every seeded category is linked to a department and carries
    // keywords for the classifier.
    for category in categories {
        assert!(category["department_id"].is_i64());
        assert!(!category["ai_keywords"].as_array().unwrap().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/departments
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_departments_returns_seeded_set(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/departments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Sanitation"));
    assert!(names.contains(&"Street Lighting"));
    assert!(names.contains(&"Road Maintenance"));
}

// ---------------------------------------------------------------------------
// Test: POST /api/v1/profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_profile_defaults_to_citizen(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/profiles",
        serde_json::json!({
            "email": "new.user@example.com",
            "full_name": "New User"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["email"], "new.user@example.com");
    assert_eq!(data["role"], "citizen");
    assert!(data["id"].is_i64());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_admin_profile(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/profiles",
        serde_json::json!({
            "email": "staff@example.com",
            "full_name": "Staff Member",
            "phone": "+49301234567",
            "role": "admin"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["role"], "admin");
    assert_eq!(json["data"]["phone"], "+49301234567");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_profile_rejects_invalid_email(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/profiles",
        serde_json::json!({
            "email": "not-an-email",
            "full_name": "Invalid"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_profile_rejects_unknown_role(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/profiles",
        serde_json::json!({
            "email": "mayor@example.com",
            "full_name": "The Mayor",
            "role": "mayor"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// Duplicate emails hit the unique constraint and map to 409.
#[sqlx::test(migrations = "../../db/migrations")]
async fn create_profile_duplicate_email_returns_409(pool: PgPool) {
    let body = serde_json::json!({
        "email": "dup@example.com",
        "full_name": "First"
    });

    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/profiles", body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = build_test_app(pool);
    let response = post_json(app, "/api/v1/profiles", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/profiles/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_profile_by_id(pool: PgPool) {
    let id = common::create_citizen(&pool, "lookup@example.com").await;

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/profiles/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"].as_i64(), Some(id));
    assert_eq!(json["data"]["email"], "lookup@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_profile_returns_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/profiles/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
