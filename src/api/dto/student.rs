//! DTOs for the student endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewStudent, Student};

/// Loose view of a creation body used by the validation stage.
///
/// Every field is optional and untyped so that presence can be checked before
/// the body is deserialized into [`CreateStudentRequest`].
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentFields {
    #[validate(required, custom(function = "is_truthy"))]
    pub roll_number: Option<Value>,

    #[validate(required, custom(function = "is_truthy"))]
    pub name: Option<Value>,

    #[validate(required, custom(function = "is_truthy"))]
    pub age: Option<Value>,

    #[validate(required, custom(function = "is_truthy"))]
    pub class: Option<Value>,
}

/// Rejects the JSON values a JavaScript client would consider falsy:
/// `false`, `0`, `""` (a `null` never gets here, it deserializes to `None`).
fn is_truthy(value: &Value) -> Result<(), ValidationError> {
    let truthy = match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    };

    if truthy {
        Ok(())
    } else {
        Err(ValidationError::new("falsy"))
    }
}

/// Request to create a student.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub roll_number: String,
    pub name: String,
    pub age: i32,
    pub class: String,
}

impl From<CreateStudentRequest> for NewStudent {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            roll_number: req.roll_number,
            name: req.name,
            age: req.age,
            class: req.class,
        }
    }
}

/// JSON representation of a stored student.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub roll_number: String,
    pub name: String,
    pub age: i32,
    pub class: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            roll_number: s.roll_number,
            name: s.name,
            age: s.age,
            class: s.class,
            id: s.id,
        }
    }
}
