//! `AuthUser` extractor: pulls the JWT from the `Authorization` header or the
//! session cookie, verifies it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::extract::cookie::CookieJar;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use estatehub_core::error::AppError;
use estatehub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts, state)
            .await
            .or_else(|| cookie_token(parts, &state.config.auth.cookie_name))
            .ok_or_else(|| AppError::authentication("Not authenticated"))?;

        let claims = state.session_manager.authenticate(&token)?;
        Ok(Self(RequestContext::from(claims)))
    }
}

/// Bearer token from the `Authorization` header, when well formed.
async fn bearer_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    let TypedHeader(Authorization(bearer)) =
        TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok()?;
    let token = bearer.token().trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Token carried by the session cookie.
fn cookie_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
