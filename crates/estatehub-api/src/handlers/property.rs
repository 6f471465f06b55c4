//! Property handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use estatehub_core::error::AppError;
use estatehub_core::types::PropertyId;
use estatehub_core::types::pagination::PageResponse;
use estatehub_service::property::PropertyInput;

use crate::dto::response::{
    ApiResponse, PropertyDeletedResponse, PropertyResponse, PropertyUpdatedResponse,
};
use crate::extractors::{AuthUser, JsonBody, PaginationParams};
use crate::state::AppState;

/// GET /api/properties
pub async fn list_properties(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<PropertyResponse>>>, AppError> {
    let page = state
        .property_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page.map(PropertyResponse::from))))
}

/// GET /api/properties/{id}
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<PropertyResponse>>, AppError> {
    let id = PropertyId::parse_param(&id, "property")?;
    let property = state.property_service.get(id).await?;
    Ok(Json(ApiResponse::ok(property.into())))
}

/// POST /api/properties
pub async fn create_property(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<PropertyInput>,
) -> Result<(StatusCode, Json<ApiResponse<PropertyResponse>>), AppError> {
    let property = state.property_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(property.into()))))
}

/// PATCH /api/properties/{id}
pub async fn update_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<PropertyInput>,
) -> Result<Json<PropertyUpdatedResponse>, AppError> {
    let id = PropertyId::parse_param(&id, "property")?;
    let property = state.property_service.update(&auth, id, req).await?;
    Ok(Json(PropertyUpdatedResponse {
        success: true,
        message: "Property updated successfully".to_string(),
        property: property.into(),
    }))
}

/// DELETE /api/properties/{id}
pub async fn delete_property(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<PropertyDeletedResponse>, AppError> {
    let id = PropertyId::parse_param(&id, "property")?;
    let deleted = state.property_service.delete(&auth, id).await?;
    Ok(Json(PropertyDeletedResponse {
        success: true,
        message: "Property deleted successfully".to_string(),
        deleted_property_id: deleted,
    }))
}
