//! Domain layer containing the registry's data model.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Policy lives in
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
