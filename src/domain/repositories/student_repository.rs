//! Repository trait for student data access.

use crate::domain::entities::{NewStudent, Student};
use crate::error::StorageError;
use async_trait::async_trait;

/// Repository interface for student records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MongoStudentRepository`] - MongoDB implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_student.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Stores a new student and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DuplicateKey`] if the roll number is already taken.
    /// Returns [`StorageError::Database`] on driver errors.
    async fn create(&self, new_student: NewStudent) -> Result<Student, StorageError>;

    /// Finds a student by its storage identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Student))` if found
    /// - `Ok(None)` if the identifier is well-formed but unknown
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidId`] if `id` is not a valid identifier.
    /// Returns [`StorageError::Database`] on driver errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, StorageError>;

    /// Checks that the backing store answers.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if the store is unreachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
