//! Handlers for the student endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::student::{CreateStudentRequest, StudentResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a student.
///
/// # Endpoint
///
/// `POST /students`
///
/// Mounted behind [`crate::api::middleware::validate_student::layer`], so the
/// four required fields are known to be present by the time this runs.
///
/// # Request Body
///
/// ```json
/// { "rollNumber": "R1", "name": "Ann", "age": 10, "class": "5A" }
/// ```
///
/// # Errors
///
/// Returns 500 with the underlying message if the body does not deserialize
/// (e.g. `age` is not an integer) or the write fails, including a duplicate
/// roll number.
pub async fn create_student_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::error!(error = %rejection, "Error creating student");
        AppError::internal(rejection.body_text())
    })?;

    let student = state
        .student_service
        .create_student(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Fetches a student by its storage identifier.
///
/// # Endpoint
///
/// `GET /students/{id}`
///
/// Responds `200` with `null` when the identifier is well-formed but unknown.
///
/// # Errors
///
/// Returns 500 with `"Error retrieving student"` for malformed identifiers
/// and storage failures.
pub async fn get_student_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<StudentResponse>>, AppError> {
    let student = state.student_service.get_student(&id).await?;

    Ok(Json(student.map(StudentResponse::from)))
}
