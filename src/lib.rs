//! # Student Registry
//!
//! A small HTTP service for creating and fetching student records, built with
//! Axum and MongoDB.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The student entity and repository trait
//! - **Application Layer** ([`application`]) - Service turning storage results into API errors
//! - **Infrastructure Layer** ([`infrastructure`]) - MongoDB connection and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and the validation stage
//!
//! ## Endpoints
//!
//! - `POST /students` - Create a student (`rollNumber`, `name`, `age`, `class` required)
//! - `GET /students/{id}` - Fetch a student by its MongoDB identifier
//! - `GET /health` - Database health check
//!
//! ## Quick Start
//!
//! ```bash
//! export MONGODB_URI="mongodb://127.0.0.1:27017/school"  # Optional
//! export PORT=3000                                      # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for the admin binary
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::StudentService;
    pub use crate::domain::entities::{NewStudent, Student};
    pub use crate::domain::repositories::StudentRepository;
    pub use crate::error::{AppError, StorageError};
    pub use crate::state::AppState;
}
