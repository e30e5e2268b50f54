//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; the creation
//! body is checked with `validator` before it is deserialized.

pub mod health;
pub mod student;
