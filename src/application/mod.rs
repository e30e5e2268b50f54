//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers (and the admin
//! CLI) a small API that already speaks [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::student_service::StudentService`] - Student creation and lookup

pub mod services;
