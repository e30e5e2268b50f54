//! MongoDB repository implementations.
//!
//! # Repositories
//!
//! - [`MongoStudentRepository`] - Student storage and retrieval

pub mod connection;
pub mod mongo_student_repository;

pub use connection::connect;
pub use mongo_student_repository::{MongoStudentRepository, STUDENTS_COLLECTION};
