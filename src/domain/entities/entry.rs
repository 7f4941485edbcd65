//! Entry entity representing a live short code mapping.

use chrono::{DateTime, TimeDelta, Utc};

/// A short code mapped to its target URL.
///
/// Entries are immutable once created: `created_at` is stamped at insertion
/// and never changes, and the entry only leaves the registry when a sweep
/// finds it older than the TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub code: String,
    pub target: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(code: String, target: String, created_at: DateTime<Utc>) -> Self {
        Self {
            code,
            target,
            created_at,
        }
    }

    /// Returns true if the entry is strictly older than `ttl` at `now`.
    ///
    /// An entry whose age equals the TTL is still live.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now.signed_duration_since(self.created_at) > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(created_at: DateTime<Utc>) -> Entry {
        Entry::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            created_at,
        )
    }

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = entry_at(now);

        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.target, "https://example.com");
        assert_eq!(entry.created_at, now);
    }

    #[test]
    fn test_entry_not_expired_within_ttl() {
        let now = Utc::now();
        let entry = entry_at(now);
        let ttl = TimeDelta::hours(1);

        assert!(!entry.is_expired(now, ttl));
        assert!(!entry.is_expired(now + TimeDelta::minutes(59), ttl));
    }

    #[test]
    fn test_entry_at_exact_ttl_is_live() {
        let now = Utc::now();
        let entry = entry_at(now);
        let ttl = TimeDelta::hours(1);

        assert!(!entry.is_expired(now + ttl, ttl));
    }

    #[test]
    fn test_entry_expired_past_ttl() {
        let now = Utc::now();
        let entry = entry_at(now);
        let ttl = TimeDelta::hours(1);

        assert!(entry.is_expired(now + ttl + TimeDelta::seconds(1), ttl));
    }
}
