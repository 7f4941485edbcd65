//! Repository trait definitions for the domain layer.
//!
//! The registry service depends on [`EntryRepository`] rather than on a
//! concrete map, so storage can be mocked in unit tests.
//!
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod entry_repository;

pub use entry_repository::EntryRepository;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;
