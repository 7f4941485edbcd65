//! Core domain entities.
//!
//! - [`Entry`] - A short code, its target URL and creation time

pub mod entry;

pub use entry::Entry;
