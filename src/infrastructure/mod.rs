//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - MongoDB connection bootstrap and repository implementations

pub mod persistence;
