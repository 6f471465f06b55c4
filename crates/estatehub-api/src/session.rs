//! The `token` session cookie.
//!
//! The cookie carries the same JWT returned in response bodies. It is
//! `HttpOnly`, `SameSite=Strict`, scoped to `/`, and lives as long as the
//! token. `Secure` follows `auth.cookie_secure`.

use axum_extra::extract::cookie::{Cookie, SameSite};

use estatehub_core::config::AuthConfig;
use estatehub_core::error::AppError;

/// Build the cookie that establishes a session.
pub fn session_cookie(config: &AuthConfig, token: &str) -> Result<Cookie<'static>, AppError> {
    let max_age = config.token_ttl().num_seconds();
    let mut cookie = Cookie::parse(format!(
        "{}={}; Max-Age={}",
        config.cookie_name, token, max_age
    ))
    .map_err(|e| AppError::internal(format!("Failed to build session cookie: {e}")))?;

    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(config.cookie_secure);
    cookie.set_path("/");
    Ok(cookie)
}

/// Cookie used to remove the session cookie on logout.
pub fn removal_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build()
}
