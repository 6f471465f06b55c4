//! # estatehub-api
//!
//! HTTP API layer for EstateHub built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, compression, logging,
//! timeouts), extractors, DTOs and the session cookie. Errors render through
//! `estatehub_core::response`.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;

pub use app::build_app;
pub use state::AppState;
