//! HTTP request handlers for API endpoints.

pub mod health;
pub mod students;

pub use health::health_handler;
pub use students::{create_student_handler, get_student_handler};
