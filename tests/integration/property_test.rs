//! Integration tests for listings: browsing, creation, ownership-checked
//! update and delete.

mod helpers;

use http::StatusCode;
use serde_json::json;

use estatehub_core::config::AuthConfig;
use estatehub_entity::property::PLACEHOLDER_IMAGE;

#[tokio::test]
async fn test_create_property() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;

    let response = app
        .request(
            "POST",
            "/api/properties",
            Some(helpers::property_body()),
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["title"], "Sea-facing apartment");
    assert_eq!(data["ownerId"], owner.user.id.to_string());
    assert_eq!(data["owner"]["email"], "owner@example.com");
    assert_eq!(data["formattedPrice"], "R 1 250 000,00");
    assert_eq!(data["status"], "For Sale");
    assert_eq!(data["address"]["country"], "South Africa");
    assert_eq!(data["features"]["furnished"], false);
}

#[tokio::test]
async fn test_create_requires_auth() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/properties", Some(helpers::property_body()), None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_validation() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;

    let mut body = helpers::property_body();
    body["title"] = json!("");
    let response = app
        .request("POST", "/api/properties", Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "title is required");

    let mut body = helpers::property_body();
    body["price"] = json!(50_000);
    let response = app
        .request("POST", "/api/properties", Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Price must be between R100,000 and R500,000,000"
    );

    let mut body = helpers::property_body();
    body["address"]["postalCode"] = json!("80051");
    let response = app
        .request("POST", "/api/properties", Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Please provide a valid 4-digit South African postal code"
    );
}

#[tokio::test]
async fn test_get_property() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let id = app.create_property(&owner).await;

    let response = app
        .request("GET", &format!("/api/properties/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["owner"]["name"], "Owner");

    let missing = app
        .request(
            "GET",
            &format!("/api/properties/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["message"], "Property not found");

    let malformed = app
        .request("GET", "/api/properties/not-an-id", None, None)
        .await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.body["message"], "Invalid property ID");
}

#[tokio::test]
async fn test_list_properties_is_paginated() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    for _ in 0..3 {
        app.create_property(&owner).await;
    }

    let response = app
        .request("GET", "/api/properties?page=1&limit=2", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let page = &response.body["data"];
    assert_eq!(page["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(page["totalItems"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["hasNext"], true);
}

#[tokio::test]
async fn test_huge_page_number_returns_empty_page() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    app.create_property(&owner).await;

    let response = app
        .request("GET", "/api/properties?page=18446744073709551615", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let page = &response.body["data"];
    assert_eq!(page["items"], json!([]));
    assert_eq!(page["totalItems"], 1);
    assert_eq!(page["hasNext"], false);
}

#[tokio::test]
async fn test_my_listings_only_returns_own() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let other = app.register("Other", "other@example.com").await;
    let mine = app.create_property(&owner).await;
    app.create_property(&other).await;

    let response = app
        .request("GET", "/api/listings/my-listings", None, Some(&owner.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], mine);

    let anonymous = app
        .request("GET", "/api/listings/my-listings", None, None)
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_owner_updates_property() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let id = app.create_property(&owner).await;

    let mut body = helpers::property_body();
    body["title"] = json!("Renovated apartment");
    body["price"] = json!("R 2,000,000");
    body["images"] = json!([]);
    body["status"] = json!("Pending");

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(body),
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["message"], "Property updated successfully");
    let property = &response.body["property"];
    assert_eq!(property["title"], "Renovated apartment");
    assert_eq!(property["price"], 2_000_000.0);
    assert_eq!(property["status"], "Pending");
    assert_eq!(property["images"], json!([PLACEHOLDER_IMAGE]));
    assert_eq!(property["ownerId"], owner.user.id.to_string());
}

#[tokio::test]
async fn test_update_accepts_formatted_price() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let id = app.create_property(&owner).await;

    let mut body = helpers::property_body();
    body["price"] = json!("R 1 250 000,00");

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(body),
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.body);
    let property = &response.body["property"];
    assert_eq!(property["price"], 1_250_000.0);
    assert_eq!(property["formattedPrice"], "R 1 250 000,00");
}

#[tokio::test]
async fn test_update_validation() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let id = app.create_property(&owner).await;
    let path = format!("/api/properties/{id}");

    let mut body = helpers::property_body();
    if let Some(fields) = body.as_object_mut() {
        fields.remove("description");
    }
    let response = app
        .request("PATCH", &path, Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "description is required");

    let mut body = helpers::property_body();
    body["propertyType"] = json!("Castle");
    let response = app
        .request("PATCH", &path, Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid property type");

    let mut body = helpers::property_body();
    body["price"] = json!(600_000_000);
    let response = app
        .request("PATCH", &path, Some(body), Some(&owner.token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let unchanged = app.request("GET", &path, None, None).await;
    assert_eq!(unchanged.body["data"]["price"], 1_250_000.0);
}

#[tokio::test]
async fn test_only_owner_may_update() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let other = app.register("Other", "other@example.com").await;
    let admin = app.admin("admin@example.com").await;
    let id = app.create_property(&owner).await;
    let path = format!("/api/properties/{id}");

    let response = app
        .request("PATCH", &path, Some(helpers::property_body()), Some(&other.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "FORBIDDEN");

    let response = app
        .request("PATCH", &path, Some(helpers::property_body()), Some(&admin.token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_update_when_enabled() {
    let mut auth = AuthConfig::with_secret(helpers::TEST_SECRET);
    auth.admin_can_modify_listings = true;
    let app = helpers::TestApp::with_auth(auth);
    let owner = app.register("Owner", "owner@example.com").await;
    let admin = app.admin("admin@example.com").await;
    let id = app.create_property(&owner).await;

    let response = app
        .request(
            "PATCH",
            &format!("/api/properties/{id}"),
            Some(helpers::property_body()),
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["property"]["ownerId"], owner.user.id.to_string());
}

#[tokio::test]
async fn test_delete_permissions() {
    let app = helpers::TestApp::new();
    let owner = app.register("Owner", "owner@example.com").await;
    let other = app.register("Other", "other@example.com").await;
    let admin = app.admin("admin@example.com").await;

    let first = app.create_property(&owner).await;
    let second = app.create_property(&owner).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{first}"),
            None,
            Some(&other.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(
        response.body["message"],
        "Not authorized to delete this property"
    );

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{first}"),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Property deleted successfully");
    assert_eq!(response.body["deletedPropertyId"], first);

    let response = app
        .request(
            "DELETE",
            &format!("/api/properties/{second}"),
            None,
            Some(&admin.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let gone = app
        .request("GET", &format!("/api/properties/{first}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}
