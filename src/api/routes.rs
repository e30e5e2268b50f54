//! API route configuration.

use crate::api::handlers::{create_student_handler, get_student_handler};
use crate::api::middleware::validate_student;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Student routes.
///
/// # Endpoints
///
/// - `POST /students`      - Create a student (validation stage runs first)
/// - `GET  /students/{id}` - Fetch a student by storage identifier
///
/// The validation stage is attached with `route_layer` on the `POST` route
/// only, so unmatched paths and other methods never reach it.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/students",
            post(create_student_handler)
                .route_layer(middleware::from_fn(validate_student::layer)),
        )
        .route("/students/{id}", get(get_student_handler))
}
