//! HTTP middleware for request processing.
//!
//! Provides the student validation stage and request tracing.

pub mod tracing;
pub mod validate_student;
