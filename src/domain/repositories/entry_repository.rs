//! Repository trait for short code storage.

use crate::domain::entities::Entry;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

/// Storage interface for registry entries.
///
/// Every method is a single atomic step against the store: implementations
/// take their lock once per call and never hand a guard back to the caller.
/// None of the operations can fail for an in-memory store, so they return
/// plain values.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryEntryRepository`] - `RwLock<HashMap>` store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Inserts `entry` unless its code is already a key.
    ///
    /// The existence check and the insert happen under one exclusive
    /// acquisition.
    ///
    /// # Returns
    ///
    /// - `true` if the entry was inserted
    /// - `false` if the code was taken (the store is left unchanged)
    async fn insert_if_absent(&self, entry: Entry) -> bool;

    /// Finds an entry by its short code.
    ///
    /// Returns a clone; callers never hold references into the store.
    async fn find_by_code(&self, code: &str) -> Option<Entry>;

    /// Removes every entry with `now - created_at > ttl`.
    ///
    /// Returns the number of removed entries.
    async fn remove_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize;

    /// Number of entries currently stored.
    async fn count(&self) -> usize;
}
