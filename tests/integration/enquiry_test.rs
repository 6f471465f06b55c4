//! Integration tests for enquiries: sending, listing and status triage.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, TestUser};

async fn send_enquiry(app: &TestApp, sender: &TestUser, property_id: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/enquiries",
            Some(json!({
                "propertyId": property_id,
                "message": "Is the apartment still available?",
            })),
            Some(&sender.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    response.body["data"]["id"]
        .as_str()
        .expect("enquiry id")
        .to_string()
}

#[tokio::test]
async fn test_create_enquiry_routes_to_owner() {
    let app = TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let buyer = app.register("Buyer", "buyer@example.com").await;
    let property = app.create_property(&owner).await;

    let response = app
        .request(
            "POST",
            "/api/enquiries",
            Some(json!({ "propertyId": property, "message": "Can I view on Saturday?" })),
            Some(&buyer.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let data = &response.body["data"];
    assert_eq!(data["status"], "pending");
    assert_eq!(data["sender"]["email"], "buyer@example.com");
    assert_eq!(data["recipient"]["email"], "owner@example.com");
    assert_eq!(data["property"]["id"], property);

    let received = app
        .request("GET", "/api/enquiries", None, Some(&owner.token))
        .await;
    assert_eq!(received.status, StatusCode::OK);
    assert_eq!(received.body["data"].as_array().map(Vec::len), Some(1));

    let sent = app
        .request("GET", "/api/enquiries", None, Some(&buyer.token))
        .await;
    assert_eq!(sent.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_create_enquiry_validation() {
    let app = TestApp::new();
    let buyer = app.register("Buyer", "buyer@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/enquiries",
            Some(json!({ "propertyId": "abc", "message": "Hello" })),
            Some(&buyer.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid property ID");

    let response = app
        .request(
            "POST",
            "/api/enquiries",
            Some(json!({ "propertyId": uuid::Uuid::new_v4().to_string(), "message": "Hello" })),
            Some(&buyer.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_owner_updates_status() {
    let app = TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let buyer = app.register("Buyer", "buyer@example.com").await;
    let property = app.create_property(&owner).await;
    let enquiry = send_enquiry(&app, &buyer, &property).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/enquiries/{enquiry}/status"),
            Some(json!({ "status": "contacted" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["status"], "contacted");
    assert_eq!(data["sender"]["name"], "Buyer");
    assert_eq!(data["property"]["title"], "Sea-facing apartment");

    let response = app
        .request(
            "PATCH",
            &format!("/api/enquiries/{enquiry}"),
            Some(json!({ "status": "resolved" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "resolved");
}

#[tokio::test]
async fn test_status_update_checks_in_order() {
    let app = TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let buyer = app.register("Buyer", "buyer@example.com").await;
    let admin = app.admin("admin@example.com").await;
    let property = app.create_property(&owner).await;
    let enquiry = send_enquiry(&app, &buyer, &property).await;
    let path = format!("/api/enquiries/{enquiry}/status");

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "closed" })), Some(&buyer.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid status");

    let response = app
        .request(
            "PATCH",
            &format!("/api/enquiries/{}/status", uuid::Uuid::new_v4()),
            Some(json!({ "status": "archived" })),
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Enquiry not found");

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "archived" })), Some(&buyer.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Unauthorized: Not the property owner"
    );

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "archived" })), Some(&admin.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("PATCH", "/api/enquiries/nope/status", Some(json!({ "status": "archived" })), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid enquiry ID");
}

#[tokio::test]
async fn test_property_with_enquiry_cannot_be_deleted() {
    let app = TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let buyer = app.register("Buyer", "buyer@example.com").await;
    let property = app.create_property(&owner).await;
    send_enquiry(&app, &buyer, &property).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{property}"),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Cannot delete property with active enquiries"
    );

    let still_there = app
        .request("GET", &format!("/api/properties/{property}"), None, None)
        .await;
    assert_eq!(still_there.status, StatusCode::OK);
}

#[tokio::test]
async fn test_enquiries_require_auth() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/enquiries", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
