//! Student record routes.
//!
//! This module implements the student CRUD endpoints:
//! - POST /students - Create a student
//! - GET /students - List all students
//! - GET /students/{id} - Fetch one student
//! - PUT /students/{id} - Update name and active flag
//! - DELETE /students/{id} - Permanently delete a student
//!
//! Every failure is converted to an `ApiError` here; unexpected causes are
//! logged and replaced by a generic message.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use roster_core::{
    NewStudent, Student, StudentChanges, StudentId, ValidationError, require_text,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::{Validate, ValidatedJson};
use crate::response::ApiResponse;
use crate::state::AppState;

const STUDENT_NOT_FOUND: &str = "Student not found";
const INVALID_ID_FORMAT: &str = "Invalid student ID format";
const DELETE_FAILED: &str = "Something went wrong on the server";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for POST /students.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub student_code: String,
    pub is_active: bool,
}

impl Validate for CreateStudentRequest {
    const INVALID_MESSAGE: &'static str = "Validation failed: 'name', 'studentCode' are required and 'isActive' must be a boolean.";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("studentCode", &self.student_code)
    }
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(request: CreateStudentRequest) -> Self {
        NewStudent::new(request.name, request.student_code, request.is_active)
    }
}

/// Request body for PUT /students/{id}.
///
/// Unknown fields, including `studentCode`, are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: String,
    pub is_active: bool,
}

impl Validate for UpdateStudentRequest {
    const INVALID_MESSAGE: &'static str = "Invalid input data";

    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)
    }
}

impl From<UpdateStudentRequest> for StudentChanges {
    fn from(request: UpdateStudentRequest) -> Self {
        StudentChanges::new(request.name, request.is_active)
    }
}

/// A student as returned by the API. `fullName` is exposed as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub id: StudentId,
    pub name: String,
    pub student_code: String,
    pub is_active: bool,
}

impl From<Student> for StudentView {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.full_name,
            student_code: student.student_code,
            is_active: student.is_active,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /students - Create a student.
///
/// # Response
///
/// - 201 Created: `{ "success": true, "message": "...", "data": {...} }`
/// - 400 Bad Request: invalid body, or the store rejected the record
///   (e.g. duplicate `studentCode`); the store's message is returned
async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStudentRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<StudentView>>)> {
    let student = state
        .repository()
        .insert_student(&request.into())
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Failed to create student");
            ApiError::Persistence(e)
        })?;

    tracing::info!(
        student_id = %student.id,
        student_code = %student.student_code,
        "Student created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Student created successfully",
            student.into(),
        )),
    ))
}

/// GET /students - List all students.
async fn list_students(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<StudentView>>>> {
    let students = state.repository().list_students().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to list students");
        ApiError::server_error()
    })?;

    tracing::debug!(count = students.len(), "Listed students");

    Ok(Json(ApiResponse::data(
        students.into_iter().map(StudentView::from).collect(),
    )))
}

/// GET /students/{id} - Fetch one student.
///
/// A malformed id is treated like any other store failure (500).
async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<StudentView>>> {
    let id = parse_id_or_server_error(&id)?;

    let student = state
        .repository()
        .get_student(id)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, student_id = %id, "Failed to fetch student");
            ApiError::server_error()
        })?
        .ok_or_else(|| ApiError::NotFound(STUDENT_NOT_FOUND.to_string()))?;

    Ok(Json(ApiResponse::data(student.into())))
}

/// PUT /students/{id} - Update name and active flag.
///
/// The body is validated before the id is looked at.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "message": "...", "data": {...} }`
/// - 400 Bad Request: invalid body
/// - 404 Not Found: no such student
/// - 500: malformed id or store failure
async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStudentRequest>,
) -> ApiResult<Json<ApiResponse<StudentView>>> {
    let id = parse_id_or_server_error(&id)?;

    let student = state
        .repository()
        .update_student(id, &request.into())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, student_id = %id, "Failed to update student");
            ApiError::server_error()
        })?
        .ok_or_else(|| ApiError::NotFound(STUDENT_NOT_FOUND.to_string()))?;

    tracing::info!(student_id = %id, "Student updated");

    Ok(Json(ApiResponse::with_message(
        "Student updated successfully",
        student.into(),
    )))
}

/// DELETE /students/{id} - Permanently delete a student.
///
/// # Response
///
/// - 200 OK: `{ "success": true, "message": "Student deleted successfully" }`
/// - 400 Bad Request: id is not 24 hex characters (checked before any store access)
/// - 404 Not Found: no such student
async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id: StudentId = id
        .parse()
        .map_err(|_| ApiError::BadRequest(INVALID_ID_FORMAT.to_string()))?;

    let deleted = state.repository().delete_student(id).await.map_err(|e| {
        tracing::error!(error = %e, student_id = %id, "Failed to delete student");
        ApiError::Internal(DELETE_FAILED.to_string())
    })?;

    if !deleted {
        return Err(ApiError::NotFound(STUDENT_NOT_FOUND.to_string()));
    }

    tracing::info!(student_id = %id, "Student deleted");

    Ok(Json(ApiResponse::message("Student deleted successfully")))
}

fn parse_id_or_server_error(id: &str) -> ApiResult<StudentId> {
    id.parse().map_err(|e| {
        tracing::error!(error = %e, "Failed to interpret student id");
        ApiError::server_error()
    })
}

/// Build student routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}

// ============================================================================
// Tests
// ============================================================================
