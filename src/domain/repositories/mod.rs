//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`StudentRepository`] - Student creation and lookup

pub mod student_repository;

pub use student_repository::StudentRepository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
