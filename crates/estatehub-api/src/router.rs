//! Route definitions for the EstateHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router with every route, without the middleware stack.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(property_routes())
        .merge(listing_routes())
        .merge(enquiry_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Register, login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Public browsing and owner CRUD
fn property_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/properties",
            get(handlers::property::list_properties).post(handlers::property::create_property),
        )
        .route(
            "/properties/{id}",
            get(handlers::property::get_property)
                .patch(handlers::property::update_property)
                .delete(handlers::property::delete_property),
        )
}

fn listing_routes() -> Router<AppState> {
    Router::new().route("/listings/my-listings", get(handlers::listing::my_listings))
}

/// Sending and triaging enquiries
fn enquiry_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/enquiries",
            get(handlers::enquiry::list_enquiries).post(handlers::enquiry::create_enquiry),
        )
        .route("/enquiries/{id}", patch(handlers::enquiry::update_status))
        .route(
            "/enquiries/{id}/status",
            patch(handlers::enquiry::update_status),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
