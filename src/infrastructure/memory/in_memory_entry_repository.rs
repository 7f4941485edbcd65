//! In-memory entry store guarded by a single reader-writer lock.

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory implementation of [`EntryRepository`].
///
/// One `RwLock` covers the whole map. Lookups take the shared side and may
/// run in parallel; inserts and sweeps take the exclusive side. Nothing is
/// persisted: the map lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryEntryRepository {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryEntryRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn insert_if_absent(&self, entry: Entry) -> bool {
        let mut entries = self.entries.write().await;

        if entries.contains_key(&entry.code) {
            debug!(code = %entry.code, "Code collision");
            return false;
        }

        entries.insert(entry.code.clone(), entry);
        true
    }

    async fn find_by_code(&self, code: &str) -> Option<Entry> {
        self.entries.read().await.get(code).cloned()
    }

    async fn remove_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(now, ttl));

        before - entries.len()
    }

    async fn count(&self) -> usize {
        self.entries.read().await.len()
    }
}
