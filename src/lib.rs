//! # TTL Shortener
//!
//! An in-memory URL shortening service built with Axum. Short codes expire
//! a fixed time after creation and are evicted by a background sweeper.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Entry`] record and the storage trait
//! - **Application Layer** ([`application`]) - Registry policy and the sweep worker
//! - **Infrastructure Layer** ([`infrastructure`]) - `RwLock<HashMap>` store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080"
//! cargo run -- --port 8080
//!
//! curl -X POST localhost:8080/shorten -d '{"long_url":"https://example.com"}'
//! ```
//!
//! Nothing is persisted: all links are lost on restart.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, RegistryError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RegistryService;
    pub use crate::domain::entities::Entry;
    pub use crate::error::{AppError, RegistryError};
    pub use crate::infrastructure::memory::InMemoryEntryRepository;
    pub use crate::state::{AppState, Registry};
}
