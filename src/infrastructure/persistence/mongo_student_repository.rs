//! MongoDB implementation of the student repository.

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewStudent, Student};
use crate::domain::repositories::StudentRepository;
use crate::error::StorageError;

/// Collection holding student documents.
pub const STUDENTS_COLLECTION: &str = "students";

/// Stored shape of a student.
///
/// Kept separate from [`Student`] so the BSON field names (`_id`, `rollNumber`)
/// stay a storage concern. The `_id` is generated client-side before insert.
#[derive(Debug, Serialize, Deserialize)]
struct StudentDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    #[serde(rename = "rollNumber")]
    roll_number: String,
    name: String,
    age: i32,
    class: String,
}

impl From<NewStudent> for StudentDocument {
    fn from(new_student: NewStudent) -> Self {
        Self {
            id: ObjectId::new(),
            roll_number: new_student.roll_number,
            name: new_student.name,
            age: new_student.age,
            class: new_student.class,
        }
    }
}

impl StudentDocument {
    fn into_student(self) -> Student {
        Student {
            id: self.id.to_hex(),
            roll_number: self.roll_number,
            name: self.name,
            age: self.age,
            class: self.class,
        }
    }
}

/// MongoDB repository for students.
///
/// Uniqueness of `rollNumber` is enforced by a unique index, see
/// [`MongoStudentRepository::ensure_indexes`].
#[derive(Clone)]
pub struct MongoStudentRepository {
    database: Database,
    collection: Collection<StudentDocument>,
}

impl MongoStudentRepository {
    /// Creates a new repository on top of an already connected database.
    pub fn new(database: Database) -> Self {
        let collection = database.collection::<StudentDocument>(STUDENTS_COLLECTION);
        Self {
            database,
            collection,
        }
    }

    /// Creates the unique `rollNumber` index if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if existing documents already violate uniqueness or the
    /// server is unreachable.
    pub async fn ensure_indexes(&self) -> Result<(), StorageError> {
        let index = IndexModel::builder()
            .keys(doc! { "rollNumber": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        let result = self.collection.create_index(index).await?;
        tracing::debug!(index = %result.index_name, "Student indexes ensured");

        Ok(())
    }

    /// Name of the database this repository writes to.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn create(&self, new_student: NewStudent) -> Result<Student, StorageError> {
        let document = StudentDocument::from(new_student);
        self.collection.insert_one(&document).await?;

        Ok(document.into_student())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, StorageError> {
        let oid = ObjectId::parse_str(id).map_err(|_| StorageError::InvalidId(id.to_string()))?;

        let document = self.collection.find_one(doc! { "_id": oid }).await?;

        Ok(document.map(StudentDocument::into_student))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
