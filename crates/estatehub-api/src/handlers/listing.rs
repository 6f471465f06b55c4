//! The signed-in user's own listings.

use axum::Json;
use axum::extract::State;

use estatehub_core::error::AppError;

use crate::dto::response::{ApiResponse, PropertyResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/listings/my-listings
pub async fn my_listings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<PropertyResponse>>>, AppError> {
    let listings = state.property_service.list_owned(&auth).await?;
    Ok(Json(ApiResponse::ok(
        listings.into_iter().map(PropertyResponse::from).collect(),
    )))
}
