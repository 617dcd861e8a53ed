use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{
    ComplaintFilterQuery, ComplaintListResponse, ComplaintResponse, CreateComplaintDto,
    DeletedComplaintResponse, PaginatedComplaints, PaginationQuery, UpdateComplaintDto,
};
use super::service::ComplaintService;

#[derive(serde::Serialize, utoipa::ToSchema)]
pub struct DeleteConfirmation {
    pub success: bool,
    pub message: String,
}

/// File a complaint (students only)
#[utoipa::path(
    post,
    path = "/api/complaints/create",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint created", body = ComplaintResponse),
        (status = 400, description = "Missing description or invalid type", body = ErrorResponse),
        (status = 403, description = "Only students can create complaints", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state, auth, dto))]
pub async fn create_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<ComplaintResponse>), AppError> {
    let complaint = ComplaintService::create(&state.db, auth.user_id(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ComplaintResponse {
            success: true,
            complaint,
        }),
    ))
}

/// List all complaints, paginated (instructors)
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Paginated complaints", body = PaginatedComplaints),
        (status = 403, description = "Wrong role", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state))]
pub async fn list_complaints(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedComplaints>, AppError> {
    let page = ComplaintService::list_paginated(&state.db, query.page, query.limit).await?;
    Ok(Json(page))
}

/// List the caller's own complaints
#[utoipa::path(
    get,
    path = "/api/complaints/student",
    params(ComplaintFilterQuery),
    responses(
        (status = 200, description = "Caller's complaints", body = ComplaintListResponse),
        (status = 400, description = "Invalid filter value", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state, auth))]
pub async fn list_student_complaints(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ComplaintFilterQuery>,
) -> Result<Json<ComplaintListResponse>, AppError> {
    let complaints =
        ComplaintService::list_for_student(&state.db, auth.user_id(), query.status, query.r#type)
            .await?;
    Ok(Json(ComplaintListResponse {
        success: true,
        complaints,
    }))
}

/// Update a complaint
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}",
    params(("id" = Uuid, Path, description = "Complaint id")),
    request_body = UpdateComplaintDto,
    responses(
        (status = 200, description = "Updated complaint", body = ComplaintResponse),
        (status = 400, description = "Empty description or invalid status/type", body = ErrorResponse),
        (status = 404, description = "Complaint not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state, dto))]
pub async fn update_complaint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateComplaintDto>,
) -> Result<Json<ComplaintResponse>, AppError> {
    let complaint = ComplaintService::update(&state.db, id, dto).await?;
    Ok(Json(ComplaintResponse {
        success: true,
        complaint,
    }))
}

/// Delete a complaint (admins only)
#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(("id" = Uuid, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint deleted", body = DeleteConfirmation),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Complaint not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state))]
pub async fn delete_complaint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteConfirmation>, AppError> {
    ComplaintService::delete(&state.db, id).await?;
    Ok(Json(DeleteConfirmation {
        success: true,
        message: "Complaint deleted successfully".to_string(),
    }))
}

/// Delete one of the caller's own complaints
#[utoipa::path(
    delete,
    path = "/api/complaints/student/{id}",
    params(("id" = Uuid, Path, description = "Complaint id")),
    responses(
        (status = 200, description = "Complaint deleted", body = DeletedComplaintResponse),
        (status = 404, description = "Complaint not found or unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Complaints"
)]
#[instrument(skip(state, auth))]
pub async fn delete_student_complaint(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedComplaintResponse>, AppError> {
    let deleted = ComplaintService::delete_owned(&state.db, id, auth.user_id()).await?;
    Ok(Json(DeletedComplaintResponse {
        success: true,
        message: "Complaint deleted successfully".to_string(),
        deleted_complaint: deleted,
    }))
}
