//! Short code registry: creation, resolution and expiry.

use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, warn};

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::RegistryError;
use crate::utils::code_generator::{generate_code, is_valid_code};

/// Maximum number of candidate codes tried by [`RegistryService::create`].
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Registry mapping short codes to target URLs.
///
/// Owns the storage handle and applies the registry policy on top of it:
/// input checks, random code generation with bounded retry, and TTL-based
/// eviction. One instance is built at startup and shared by `Arc` between
/// the HTTP handlers and the sweep worker.
pub struct RegistryService<R: EntryRepository> {
    repository: Arc<R>,
}

impl<R: EntryRepository> RegistryService<R> {
    /// Creates a new registry over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers `target` under a freshly generated code and returns the code.
    ///
    /// The target is stored as given; it is not parsed or normalized.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] if `target` is empty; nothing is stored
    /// - [`RegistryError::ExhaustedRetries`] if [`MAX_CODE_ATTEMPTS`] candidates all collided
    pub async fn create(&self, target: &str) -> Result<String, RegistryError> {
        if target.is_empty() {
            return Err(RegistryError::InvalidInput("Missing URL".to_string()));
        }

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();
            let entry = Entry::new(code.clone(), target.to_string(), Utc::now());

            if self.repository.insert_if_absent(entry).await {
                debug!(code = %code, attempt, "Short code created");
                return Ok(code);
            }
        }

        warn!(
            attempts = MAX_CODE_ATTEMPTS,
            "Gave up generating a unique short code"
        );

        Err(RegistryError::ExhaustedRetries {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }

    /// Returns the target URL stored under `code`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if the code was never issued or its
    /// entry has already been swept. The two cases are not distinguished.
    pub async fn resolve(&self, code: &str) -> Result<String, RegistryError> {
        if !is_valid_code(code) {
            return Err(RegistryError::NotFound(code.to_string()));
        }

        self.repository
            .find_by_code(code)
            .await
            .map(|entry| entry.target)
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// Evicts every entry older than `ttl` as of `now`.
    ///
    /// Entries whose age is exactly `ttl` are kept. Returns the number of
    /// evicted entries.
    pub async fn sweep(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize {
        self.repository.remove_expired(now, ttl).await
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        self.repository.count().await
    }

    /// Returns true if the registry holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
