//! Health check handler.

use axum::Json;
use axum::extract::State;

use estatehub_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
///
/// Fails with a 500 when the backing store does not answer.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HealthResponse>>, AppError> {
    state.stores.health_check().await?;

    Ok(Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: state.stores.backend_name().to_string(),
    })))
}
