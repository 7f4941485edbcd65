//! Infrastructure layer implementing domain repository traits.
//!
//! # Modules
//!
//! - [`memory`] - Process-local storage behind a reader-writer lock

pub mod memory;
