//! Validation stage for student creation.

use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use validator::Validate;

use crate::api::dto::student::StudentFields;
use crate::error::AppError;

/// Largest request body the stage will buffer (100 KiB).
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Rejects creation requests whose body lacks any required student field.
///
/// Runs before the create handler. The body is buffered, checked for
/// `rollNumber`, `name`, `age` and `class`, then handed on unchanged.
///
/// # Body Handling
///
/// - No JSON content type, or an empty body: treated as an absent body
/// - Body that is not a JSON object: rejected as malformed
///
/// # Errors
///
/// - `400 Bad Request` if a field is missing or falsy, or the JSON is malformed
/// - `413 Payload Too Large` if the body exceeds [`MAX_BODY_BYTES`]
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::post};
///
/// let app = Router::new().route(
///     "/students",
///     post(create_student_handler).route_layer(middleware::from_fn(validate_student::layer)),
/// );
/// ```
pub async fn layer(req: Request, next: Next) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();

    let bytes = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::PayloadTooLarge)?;

    let fields = if is_json(&parts.headers) && !bytes.is_empty() {
        serde_json::from_slice::<StudentFields>(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Malformed student body");
            AppError::bad_request("Malformed JSON request body")
        })?
    } else {
        StudentFields::default()
    };

    fields.validate()?;

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
}
