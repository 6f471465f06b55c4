//! Enquiry handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use estatehub_core::error::AppError;
use estatehub_core::types::EnquiryId;
use estatehub_entity::enquiry::EnquiryDetails;
use estatehub_service::enquiry::{EnquiryInput, StatusInput};

use crate::dto::response::ApiResponse;
use crate::extractors::{AuthUser, JsonBody};
use crate::state::AppState;

/// POST /api/enquiries
pub async fn create_enquiry(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(req): JsonBody<EnquiryInput>,
) -> Result<(StatusCode, Json<ApiResponse<EnquiryDetails>>), AppError> {
    let enquiry = state.enquiry_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(enquiry))))
}

/// GET /api/enquiries
pub async fn list_enquiries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<EnquiryDetails>>>, AppError> {
    let enquiries = state.enquiry_service.list_received(&auth).await?;
    Ok(Json(ApiResponse::ok(enquiries)))
}

/// PATCH /api/enquiries/{id} and /api/enquiries/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<StatusInput>,
) -> Result<Json<ApiResponse<EnquiryDetails>>, AppError> {
    let id = EnquiryId::parse_param(&id, "enquiry")?;
    let enquiry = state.enquiry_service.update_status(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(enquiry)))
}
