//! Registration, login, and profile flow tests
//!
//! These drive the real router against a PostgreSQL database and are
//! ignored unless one is available via DATABASE_URL.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use serial_test::serial;

use common::{send_json, setup_app, unique_email, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD};

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_register_employee_and_login() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("employee");

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Sam Rivera",
            "email": email,
            "password": "password123",
            "role": "employee"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["role"], "employee");
    assert_eq!(body["user"]["profile"], json!({}));
    assert!(body["access_token"].as_str().is_some());

    // The issued token resolves back to the same user
    let token = body["access_token"].as_str().unwrap().to_string();
    let (status, me) = send_json(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], email.as_str());

    // And plain login works too
    let (status, login) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "password123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["user"]["email"], email.as_str());
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_duplicate_email_is_conflict() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("dup");

    let payload = json!({
        "name": "First User",
        "email": email,
        "password": "password123",
        "role": "employee"
    });

    let (status, _) = send_json(&app, "POST", "/api/auth/register", None, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Second User",
            "email": email,
            "password": "different-password",
            "role": "employee"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // The first registration is unaffected
    let (status, login) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "password123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(login["user"]["name"], "First User");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_self_assigned_admin_is_forbidden() {
    let (app, _pool, _config) = setup_app().await.unwrap();

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Wannabe Admin",
            "email": unique_email("admin"),
            "password": "password123",
            "role": "admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_employer_without_company_is_bad_request() {
    let (app, _pool, _config) = setup_app().await.unwrap();

    let (status, _) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Companyless Employer",
            "email": unique_email("employer"),
            "password": "password123",
            "role": "employer"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_employer_registration_with_inline_company() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("acme");

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Jane Smith",
            "email": email,
            "password": "password123",
            "role": "employer",
            "company": {"name": "Acme", "description": "", "website": null}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let company_id = body["user"]["companyId"].as_str().unwrap().to_string();

    // The new company is fetchable and starts unverified
    let (status, company) = send_json(
        &app,
        "GET",
        &format!("/api/companies/{company_id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(company["name"], "Acme");
    assert_eq!(company["isVerified"], false);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_login_failures_are_uniform() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("uniform");

    send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Uniform User",
            "email": email,
            "password": "password123",
            "role": "employee"
        })),
    )
    .await;

    // Wrong password for an existing email
    let (status_wrong, body_wrong) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": email, "password": "wrong-password"})),
    )
    .await;

    // Login for an email that does not exist
    let (status_missing, body_missing) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": unique_email("missing"), "password": "password123"})),
    )
    .await;

    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    assert_eq!(status_missing, StatusCode::UNAUTHORIZED);
    // Identical error payloads: no email enumeration
    assert_eq!(body_wrong, body_missing);
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_admin_login_via_configured_credentials() {
    let (app, pool, config) = setup_app().await.unwrap();

    // Admin accounts are provisioned out-of-band: insert one directly
    let admin_id = uuid::Uuid::new_v4();
    let hash = greenjobs_auth::hash_password("some-stored-password", 4).unwrap();
    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, profile, company_id, created_at)
        VALUES ($1, 'Admin User', $2, $3, 'admin', '{}'::jsonb, NULL, NOW())
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(admin_id)
    .bind(&config.admin_email)
    .bind(&hash)
    .execute(&pool)
    .await
    .unwrap();

    // The configured cleartext pair wins even though the stored hash is
    // for a different password
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"email": TEST_ADMIN_EMAIL, "password": TEST_ADMIN_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_profile_update_merges_supplied_fields() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("profile");

    let (_, registered) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Profile Owner",
            "email": email,
            "password": "password123",
            "role": "employee"
        })),
    )
    .await;
    let token = registered["access_token"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/auth/profile",
        Some(&token),
        Some(json!({"summary": "Renewables engineer", "skills": ["solar", "wind"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["summary"], "Renewables engineer");

    // Patching one field leaves the others untouched
    let (status, body) = send_json(
        &app,
        "PUT",
        "/api/auth/profile",
        Some(&token),
        Some(json!({"resumeUrl": "https://example.com/resume.pdf"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["summary"], "Renewables engineer");
    assert_eq!(body["profile"]["skills"], json!(["solar", "wind"]));
    assert_eq!(body["profile"]["resumeUrl"], "https://example.com/resume.pdf");
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_profile_update_forbidden_for_non_employee() {
    let (app, _pool, _config) = setup_app().await.unwrap();
    let email = unique_email("employer-profile");

    let (_, registered) = send_json(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Employer",
            "email": email,
            "password": "password123",
            "role": "employer",
            "company": {"name": "Edit Co", "description": "", "website": null}
        })),
    )
    .await;
    let token = registered["access_token"].as_str().unwrap().to_string();

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/auth/profile",
        Some(&token),
        Some(json!({"summary": "should not land"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Profile unchanged
    let (_, me) = send_json(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(me["profile"], json!({}));
}

#[tokio::test]
#[serial]
#[ignore] // Requires a PostgreSQL database (DATABASE_URL) - run with --ignored
async fn test_requests_without_token_are_unauthorized() {
    let (app, _pool, _config) = setup_app().await.unwrap();

    let (status, _) = send_json(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send_json(&app, "GET", "/api/auth/me", Some("garbage-token"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
