//! Auth handlers: register, login, logout, session.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use estatehub_auth::jwt::IssuedToken;
use estatehub_core::error::AppError;
use estatehub_entity::user::User;
use estatehub_service::user::RegisterInput;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, AuthResponse, MessageResponse};
use crate::extractors::{AuthUser, JsonBody};
use crate::session::{removal_cookie, session_cookie};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<RegisterInput>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), AppError> {
    let registration = state.user_service.register(req).await?;
    let (jar, body) = signed_in(&state, jar, registration.user, registration.token)?;
    Ok((StatusCode::CREATED, jar, body))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    let result = state.session_manager.login(&email, &password).await?;
    signed_in(&state, jar, result.user, result.token)
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(removal_cookie(&state.config.auth));
    (
        jar,
        Json(MessageResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    )
}

/// GET /api/auth/session
pub async fn session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

fn signed_in(
    state: &AppState,
    jar: CookieJar,
    user: User,
    token: IssuedToken,
) -> Result<(CookieJar, Json<AuthResponse>), AppError> {
    let cookie = session_cookie(&state.config.auth, &token.token)?;
    Ok((
        jar.add(cookie),
        Json(AuthResponse {
            success: true,
            token: token.token,
            expires_at: token.expires_at,
            user,
        }),
    ))
}
