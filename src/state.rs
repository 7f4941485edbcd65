//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::RegistryService;
use crate::infrastructure::memory::InMemoryEntryRepository;

/// Registry type served by the HTTP layer.
pub type Registry = RegistryService<InMemoryEntryRepository>;

/// State cloned into every request.
///
/// Holds the process-wide registry by `Arc`; the same handle is given to the
/// sweep worker.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub base_url: String,
}

impl AppState {
    /// Creates the state. A trailing `/` on `base_url` is dropped.
    pub fn new(registry: Arc<Registry>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { registry, base_url }
    }

    /// Builds the public short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Arc<Registry> {
        Arc::new(RegistryService::new(Arc::new(InMemoryEntryRepository::new())))
    }

    #[test]
    fn test_short_url() {
        let state = AppState::new(registry(), "http://localhost:8080");
        assert_eq!(state.short_url("aZ3k9Q"), "http://localhost:8080/aZ3k9Q");
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let state = AppState::new(registry(), "https://s.example.com/");
        assert_eq!(state.short_url("aZ3k9Q"), "https://s.example.com/aZ3k9Q");
    }
}
