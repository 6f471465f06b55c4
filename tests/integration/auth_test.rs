//! Integration tests for registration, sign-in and sessions.

mod helpers;

use axum::body::Body;
use chrono::{Duration, Utc};
use http::{Request, StatusCode};
use serde_json::json;

use estatehub_auth::jwt::JwtEncoder;

#[tokio::test]
async fn test_register_sets_cookie_and_returns_token() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Thandi",
                "email": "Thandi@Example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(response.body["user"]["email"], "thandi@example.com");
    assert_eq!(response.body["user"]["role"], "user");
    assert!(response.body["user"].get("passwordHash").is_none());

    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token="));
    assert!(cookies[0].contains("HttpOnly"));
    assert!(cookies[0].contains("SameSite=Strict"));
}

#[tokio::test]
async fn test_register_duplicate_email_any_case() {
    let app = helpers::TestApp::new();
    app.register("Sipho", "sipho@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({
                "name": "Other Sipho",
                "email": "SIPHO@example.com",
                "password": "another-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "User already exists");

    // The first account still signs in with its own password.
    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "sipho@example.com", "password": helpers::TEST_PASSWORD })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["user"]["name"], "Sipho");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(json!({ "email": "nobody@example.com" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "Please provide all required fields");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = helpers::TestApp::new();

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid request body");
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new();
    app.register("Lerato", "lerato@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "lerato@example.com", "password": "wrong-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "ghost@example.com", "password": "whatever1" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_field_is_invalid_credentials() {
    let app = helpers::TestApp::new();
    app.register("Lerato", "lerato@example.com").await;

    for body in [
        json!({ "email": "lerato@example.com" }),
        json!({ "password": helpers::TEST_PASSWORD }),
        json!({}),
    ] {
        let response = app
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body["error"], "UNAUTHORIZED");
        assert_eq!(response.body["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn test_session_with_bearer_and_cookie() {
    let app = helpers::TestApp::new();
    let user = app.register("Ayanda", "ayanda@example.com").await;

    let bearer = app
        .request("GET", "/api/auth/session", None, Some(&user.token))
        .await;
    assert_eq!(bearer.status, StatusCode::OK);
    assert_eq!(bearer.body["data"]["email"], "ayanda@example.com");

    let req = Request::builder()
        .method("GET")
        .uri("/api/auth/session")
        .header("Cookie", format!("token={}", user.token))
        .body(Body::empty())
        .expect("request");
    let cookie = app.send(req).await;
    assert_eq!(cookie.status, StatusCode::OK);
    assert_eq!(cookie.body["data"]["id"], user.user.id.to_string());
}

#[tokio::test]
async fn test_session_without_token() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/auth/session", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authenticated");

    let garbage = app
        .request("GET", "/api/auth/session", None, Some("not.a.jwt"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_lifetime_is_thirty_days() {
    let app = helpers::TestApp::new();
    let user = app.register("Naledi", "naledi@example.com").await;
    let encoder = JwtEncoder::new(&app.config.auth);

    let fresh = encoder
        .issue_at(&user.user, Utc::now() - Duration::days(29))
        .expect("issue");
    let response = app
        .request("GET", "/api/auth/session", None, Some(&fresh.token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let stale = encoder
        .issue_at(&user.user, Utc::now() - Duration::days(31))
        .expect("issue");
    let response = app
        .request("GET", "/api/auth/session", None, Some(&stale.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = helpers::TestApp::new();
    let user = app.register("Bongani", "bongani@example.com").await;

    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header("Cookie", format!("token={}", user.token))
        .body(Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    let cookies = response.set_cookies();
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("token="));
    assert!(cookies[0].contains("Max-Age=0"));
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "memory");
}
