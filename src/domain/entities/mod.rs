//! Core domain entities.
//!
//! Entities follow the same split as the rest of the crate: a persisted type
//! ([`Student`]) and a separate input type for creation ([`NewStudent`]).

pub mod student;

pub use student::{NewStudent, Student};
