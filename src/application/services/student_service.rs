//! Student creation and retrieval service.

use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::AppError;

/// Service for creating and retrieving students.
///
/// Converts repository errors into the two failure shapes clients see:
/// writes expose the underlying message, lookups only ever say
/// "Error retrieving student".
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new student.
    ///
    /// The roll number is checked again here because the service is also
    /// reachable without the HTTP validation stage (see the `admin` binary).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the roll number is empty or the
    /// repository rejects the write (including a duplicate roll number).
    pub async fn create_student(&self, new_student: NewStudent) -> Result<Student, AppError> {
        if new_student.roll_number.is_empty() {
            tracing::error!("Error creating student: rollNumber is required");
            return Err(AppError::internal("rollNumber is required"));
        }

        let roll_number = new_student.roll_number.clone();

        match self.repository.create(new_student).await {
            Ok(student) => {
                tracing::info!(id = %student.id, roll_number = %roll_number, "Student created");
                Ok(student)
            }
            Err(e) => {
                tracing::error!(error = %e, roll_number = %roll_number, "Error creating student");
                Err(AppError::internal(e.to_string()))
            }
        }
    }

    /// Looks up a student by storage identifier.
    ///
    /// A well-formed identifier that matches nothing is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Retrieval`] for malformed identifiers and storage
    /// failures. The cause is logged, never returned.
    pub async fn get_student(&self, id: &str) -> Result<Option<Student>, AppError> {
        self.repository.find_by_id(id).await.map_err(|e| {
            tracing::error!(error = %e, id, "Error retrieving student");
            AppError::Retrieval
        })
    }

    /// Probes the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] with the storage error message.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository
            .ping()
            .await
            .map_err(|e| AppError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockStudentRepository;
    use crate::error::{RETRIEVAL_FAILED_MESSAGE, StorageError};

    const ID: &str = "65f0c0ffee0000000000abcd";

    fn new_student(roll_number: &str) -> NewStudent {
        NewStudent {
            roll_number: roll_number.to_string(),
            name: "Ann".to_string(),
            age: 10,
            class: "5A".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_student_success() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo
            .expect_create()
            .withf(|s| s.roll_number == "R1" && s.name == "Ann")
            .times(1)
            .returning(|s| Ok(Student::from_new(ID.to_string(), s)));

        let service = StudentService::new(Arc::new(mock_repo));

        let student = service.create_student(new_student("R1")).await.unwrap();

        assert_eq!(student.id, ID);
        assert_eq!(student.roll_number, "R1");
        assert_eq!(student.class, "5A");
    }

    #[tokio::test]
    async fn test_create_student_empty_roll_number_skips_repository() {
        let mut mock_repo = MockStudentRepository::new();
        mock_repo.expect_create().never();

        let service = StudentService::new(Arc::new(mock_repo));

        let result = service.create_student(new_student("")).await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn test_create_student_duplicate_exposes_message() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo.expect_create().times(1).returning(|_| {
            Err(StorageError::DuplicateKey(
                "E11000 duplicate key error collection: school.students index: rollNumber_1"
                    .to_string(),
            ))
        });

        let service = StudentService::new(Arc::new(mock_repo));

        let err = service.create_student(new_student("R1")).await.unwrap_err();

        assert!(matches!(err, AppError::Internal(ref m) if m.starts_with("E11000")));
    }

    #[tokio::test]
    async fn test_get_student_found() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo
            .expect_find_by_id()
            .withf(|id| id == ID)
            .times(1)
            .returning(|id| Ok(Some(Student::from_new(id.to_string(), new_student("R1")))));

        let service = StudentService::new(Arc::new(mock_repo));

        let student = service.get_student(ID).await.unwrap();

        assert_eq!(student.map(|s| s.id), Some(ID.to_string()));
    }

    #[tokio::test]
    async fn test_get_student_missing_is_not_an_error() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = StudentService::new(Arc::new(mock_repo));

        assert!(service.get_student(ID).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_student_invalid_id_hides_cause() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|id| Err(StorageError::InvalidId(id.to_string())));

        let service = StudentService::new(Arc::new(mock_repo));

        let err = service.get_student("not-an-id").await.unwrap_err();

        assert!(matches!(err, AppError::Retrieval));
        assert_eq!(err.to_string(), RETRIEVAL_FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn test_health_check_reports_storage_error() {
        let mut mock_repo = MockStudentRepository::new();

        mock_repo
            .expect_ping()
            .times(1)
            .returning(|| Err(StorageError::InvalidId("x".to_string())));

        let service = StudentService::new(Arc::new(mock_repo));

        assert!(matches!(
            service.health_check().await,
            Err(AppError::Unavailable(_))
        ));
    }
}
