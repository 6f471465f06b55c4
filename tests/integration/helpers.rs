//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use estatehub_api::{AppState, build_app};
use estatehub_auth::password::PasswordHasher;
use estatehub_core::config::{AppConfig, AuthConfig, DatabaseConfig, DatabaseProvider};
use estatehub_database::{Stores, UserStore};
use estatehub_entity::user::{CreateUser, User, UserRole};

/// Signing secret used by every test app.
pub const TEST_SECRET: &str = "integration-test-signing-secret-0123456789";

/// Password used for every seeded account.
pub const TEST_PASSWORD: &str = "password123";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct seeding and inspection
    pub stores: Stores,
    /// Application config
    pub config: AppConfig,
}

/// A signed-in account.
pub struct TestUser {
    /// The stored user.
    pub user: User,
    /// Bearer token for requests.
    pub token: String,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        Self::with_auth(AuthConfig::with_secret(TEST_SECRET))
    }

    /// Create a test application with custom auth settings
    pub fn with_auth(auth: AuthConfig) -> Self {
        let config = AppConfig {
            server: Default::default(),
            database: DatabaseConfig {
                provider: DatabaseProvider::Memory,
                ..Default::default()
            },
            auth,
            logging: Default::default(),
        };
        config.validate().expect("test config should be valid");

        let stores = Stores::memory();
        let router = build_app(AppState::new(config.clone(), stores.clone()));

        Self {
            router,
            stores,
            config,
        }
    }

    /// Register through the API and return the new account.
    pub async fn register(&self, name: &str, email: &str) -> TestUser {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(json!({ "name": name, "email": email, "password": TEST_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);

        self.signed_in(email, response.body["token"].as_str().unwrap_or_default())
            .await
    }

    /// Seed an admin directly in the store and sign in through the API.
    pub async fn admin(&self, email: &str) -> TestUser {
        let hash = PasswordHasher::new()
            .hash_password(TEST_PASSWORD)
            .expect("hash");
        self.stores
            .users
            .create(&CreateUser {
                name: "Admin".to_string(),
                email: email.to_string(),
                password_hash: hash,
                role: UserRole::Admin,
            })
            .await
            .expect("seed admin");

        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(json!({ "email": email, "password": TEST_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);

        self.signed_in(email, response.body["token"].as_str().unwrap_or_default())
            .await
    }

    async fn signed_in(&self, email: &str, token: &str) -> TestUser {
        let user = self
            .stores
            .users
            .find_by_email(email)
            .await
            .expect("lookup")
            .expect("user exists");
        TestUser {
            user,
            token: token.to_string(),
        }
    }

    /// Create a listing through the API and return its id.
    pub async fn create_property(&self, owner: &TestUser) -> String {
        let response = self
            .request(
                "POST",
                "/api/properties",
                Some(property_body()),
                Some(&owner.token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("property id")
            .to_string()
    }

    /// Send a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prepared request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// A valid create/update body.
pub fn property_body() -> Value {
    json!({
        "title": "Sea-facing apartment",
        "description": "Two bedrooms with a view of the harbour.",
        "price": 1_250_000,
        "location": "Sea Point",
        "address": {
            "street": "12 Beach Road",
            "city": "Cape Town",
            "province": "Western Cape",
            "postalCode": "8005"
        },
        "propertyType": "Apartment",
        "features": { "bedrooms": 2, "bathrooms": 1, "parking": true },
        "images": ["https://img.example/1.jpg"]
    })
}

/// Parsed response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `Set-Cookie` header values.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }
}
