//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use estatehub_auth::credentials::CredentialVerifier;
use estatehub_auth::jwt::{JwtDecoder, JwtEncoder};
use estatehub_auth::ownership::OwnershipGuard;
use estatehub_auth::password::{PasswordHasher, PasswordValidator};
use estatehub_auth::session::SessionManager;
use estatehub_core::config::AppConfig;
use estatehub_database::store::Stores;
use estatehub_service::{EnquiryService, PropertyService, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Backing stores, kept for health checks
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    /// Login and token verification
    pub session_manager: Arc<SessionManager>,

    // ── Services ─────────────────────────────────────────────
    /// Registration and profile
    pub user_service: Arc<UserService>,
    /// Listings
    pub property_service: Arc<PropertyService>,
    /// Enquiries
    pub enquiry_service: Arc<EnquiryService>,
}

impl AppState {
    /// Wire every component over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let hasher = PasswordHasher::new();
        let encoder = Arc::new(JwtEncoder::new(&config.auth));
        let decoder = Arc::new(JwtDecoder::new(&config.auth));
        let verifier = Arc::new(CredentialVerifier::new(
            Arc::clone(&stores.users),
            hasher.clone(),
        ));
        let session_manager = Arc::new(SessionManager::new(verifier, encoder, decoder));
        let guard = OwnershipGuard::new(&config.auth);

        let user_service = Arc::new(UserService::new(
            Arc::clone(&stores.users),
            Arc::new(hasher),
            Arc::new(PasswordValidator::new(&config.auth)),
            Arc::clone(&session_manager),
        ));
        let property_service = Arc::new(PropertyService::new(&stores, guard));
        let enquiry_service = Arc::new(EnquiryService::new(&stores, guard));

        Self {
            config: Arc::new(config),
            stores,
            session_manager,
            user_service,
            property_service,
            enquiry_service,
        }
    }
}
