#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use mongodb::bson::oid::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use student_registry::api::routes::student_routes;
use student_registry::prelude::{
    AppState, NewStudent, StorageError, Student, StudentRepository, StudentService,
};

/// In-memory stand-in for the MongoDB repository.
///
/// Mirrors the behaviors the handlers depend on: ObjectId-shaped identifiers,
/// a unique roll number, and a switch to make every call fail.
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<HashMap<String, Student>>,
    create_calls: AtomicUsize,
    offline: AtomicBool,
}

impl InMemoryStudentRepository {
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.students.lock().unwrap().len()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StorageError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StorageError::Database(mongodb::error::Error::from(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, StorageError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;

        let mut students = self.students.lock().unwrap();

        if students
            .values()
            .any(|s| s.roll_number == new_student.roll_number)
        {
            return Err(StorageError::DuplicateKey(format!(
                "E11000 duplicate key error collection: school.students index: rollNumber_1 dup key: {{ rollNumber: \"{}\" }}",
                new_student.roll_number
            )));
        }

        let student = Student::from_new(ObjectId::new().to_hex(), new_student);
        students.insert(student.id.clone(), student.clone());

        Ok(student)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, StorageError> {
        self.check_online()?;

        let oid = ObjectId::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))?;

        Ok(self.students.lock().unwrap().get(&oid.to_hex()).cloned())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.check_online()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryStudentRepository>) {
    let repository = Arc::new(InMemoryStudentRepository::default());
    let student_service = Arc::new(StudentService::new(repository.clone()));

    (AppState::new(student_service), repository)
}

pub fn make_server() -> (TestServer, Arc<InMemoryStudentRepository>) {
    let (state, repository) = create_test_state();
    let app = student_routes().with_state(state);

    (TestServer::new(app).unwrap(), repository)
}
