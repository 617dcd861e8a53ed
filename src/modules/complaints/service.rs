use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

use super::model::{
    Complaint, ComplaintStatus, ComplaintType, CreateComplaintDto, PaginatedComplaints,
    PaginationMeta, UpdateComplaintDto,
};

const COMPLAINT_COLUMNS: &str =
    "id, student_id, description, complaint_type, status, first_name, last_name, \
     created_at, updated_at";

pub struct ComplaintService;

impl ComplaintService {
    /// Files a complaint. The student role is re-checked against the store
    /// and the student's name is denormalized onto the row at creation.
    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        student_id: Uuid,
        dto: CreateComplaintDto,
    ) -> Result<Complaint, AppError> {
        let description = dto.description.trim();
        if description.is_empty() {
            return Err(AppError::bad_request("Description is required"));
        }

        let complaint_type = ComplaintType::parse(&dto.r#type)
            .ok_or_else(|| AppError::bad_request("Invalid complaint type"))?;

        let student: Option<(String, String, UserRole)> =
            sqlx::query_as("SELECT first_name, last_name, role FROM users WHERE id = $1")
                .bind(student_id)
                .fetch_optional(db)
                .await?;

        let (first_name, last_name) = match student {
            Some((first_name, last_name, UserRole::Student)) => (first_name, last_name),
            _ => return Err(AppError::forbidden("Only students can create complaints")),
        };

        let query = format!(
            "INSERT INTO complaints (student_id, description, complaint_type, first_name, last_name)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COMPLAINT_COLUMNS}"
        );
        let complaint = sqlx::query_as::<_, Complaint>(&query)
            .bind(student_id)
            .bind(description)
            .bind(complaint_type)
            .bind(&first_name)
            .bind(&last_name)
            .fetch_one(db)
            .await?;

        Ok(complaint)
    }

    /// Paginated listing, newest first. Out-of-range pages yield an empty
    /// list with truthful pagination meta rather than an error.
    #[instrument(skip(db))]
    pub async fn list_paginated(
        db: &PgPool,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<PaginatedComplaints, AppError> {
        let page = page.unwrap_or(1).max(1);
        let limit = limit.unwrap_or(10).clamp(1, 100);
        let offset = (page - 1) * limit;

        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        let complaints = sqlx::query_as::<_, Complaint>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(db)
            .await?;

        let total_complaints: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM complaints")
            .fetch_one(db)
            .await?;

        Ok(PaginatedComplaints {
            success: true,
            complaints,
            pagination: PaginationMeta {
                current_page: page,
                total_pages: (total_complaints + limit - 1) / limit,
                total_complaints,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn list_for_student(
        db: &PgPool,
        student_id: Uuid,
        status: Option<String>,
        type_filter: Option<String>,
    ) -> Result<Vec<Complaint>, AppError> {
        let status = status
            .map(|s| ComplaintStatus::parse(&s).ok_or_else(|| AppError::bad_request("Invalid status")))
            .transpose()?;
        let complaint_type = type_filter
            .map(|t| {
                ComplaintType::parse(&t).ok_or_else(|| AppError::bad_request("Invalid complaint type"))
            })
            .transpose()?;

        let query = format!(
            "SELECT {COMPLAINT_COLUMNS} FROM complaints
             WHERE student_id = $1
               AND ($2::complaint_status IS NULL OR status = $2)
               AND ($3::complaint_type IS NULL OR complaint_type = $3)
             ORDER BY created_at DESC"
        );
        let complaints = sqlx::query_as::<_, Complaint>(&query)
            .bind(student_id)
            .bind(status)
            .bind(complaint_type)
            .fetch_all(db)
            .await?;

        Ok(complaints)
    }

    #[instrument(skip(db, dto))]
    pub async fn update(
        db: &PgPool,
        complaint_id: Uuid,
        dto: UpdateComplaintDto,
    ) -> Result<Complaint, AppError> {
        let description = match dto.description {
            Some(description) => {
                let trimmed = description.trim().to_string();
                if trimmed.is_empty() {
                    return Err(AppError::bad_request("Description cannot be empty"));
                }
                Some(trimmed)
            }
            None => None,
        };
        let status = dto
            .status
            .map(|s| ComplaintStatus::parse(&s).ok_or_else(|| AppError::bad_request("Invalid status")))
            .transpose()?;
        let complaint_type = dto
            .r#type
            .map(|t| {
                ComplaintType::parse(&t).ok_or_else(|| AppError::bad_request("Invalid complaint type"))
            })
            .transpose()?;

        let query = format!(
            "UPDATE complaints SET
                 description = COALESCE($2, description),
                 status = COALESCE($3, status),
                 complaint_type = COALESCE($4, complaint_type),
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COMPLAINT_COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(complaint_id)
            .bind(description)
            .bind(status)
            .bind(complaint_type)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Complaint not found"))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, complaint_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM complaints WHERE id = $1")
            .bind(complaint_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Complaint not found"));
        }
        Ok(())
    }

    /// Student-owned deletion. The ownership predicate lives in the WHERE
    /// clause, so someone else's complaint id behaves exactly like a missing
    /// one.
    #[instrument(skip(db))]
    pub async fn delete_owned(
        db: &PgPool,
        complaint_id: Uuid,
        student_id: Uuid,
    ) -> Result<Complaint, AppError> {
        let query = format!(
            "DELETE FROM complaints WHERE id = $1 AND student_id = $2
             RETURNING {COMPLAINT_COLUMNS}"
        );
        sqlx::query_as::<_, Complaint>(&query)
            .bind(complaint_id)
            .bind(student_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::not_found("Complaint not found or unauthorized"))
    }
}
