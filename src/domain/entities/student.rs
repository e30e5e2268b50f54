//! Student entity.

/// A persisted student record.
///
/// `id` is assigned by the storage layer at creation time and is distinct from
/// the business key `roll_number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: String,
    pub roll_number: String,
    pub name: String,
    pub age: i32,
    pub class: String,
}

impl Student {
    /// Builds a persisted record from creation input and the assigned identifier.
    pub fn from_new(id: String, new_student: NewStudent) -> Self {
        Self {
            id,
            roll_number: new_student.roll_number,
            name: new_student.name,
            age: new_student.age,
            class: new_student.class,
        }
    }
}

/// Input data for creating a new student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub roll_number: String,
    pub name: String,
    pub age: i32,
    pub class: String,
}
