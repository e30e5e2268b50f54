//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::application::services::StudentService;

/// Application state injected into handlers via axum's `State` extractor.
///
/// Built once at startup from an already connected repository. Holds no
/// mutable data, so cloning per request is just an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    pub student_service: Arc<StudentService>,
}

impl AppState {
    pub fn new(student_service: Arc<StudentService>) -> Self {
        Self { student_service }
    }
}
