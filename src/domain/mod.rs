//! Domain layer containing the student entity and the repository contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on HTTP or on the storage driver. Concrete
//! repositories live in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
