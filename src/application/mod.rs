//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and background workers.
//!
//! - [`services::registry_service::RegistryService`] - Short code creation, resolution and expiry
//! - [`sweep_worker::run_sweep_worker`] - Periodic eviction of expired entries

pub mod services;
pub mod sweep_worker;
