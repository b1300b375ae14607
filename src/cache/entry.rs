//! Cache entry type.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A cached provider payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The raw response body as returned by the origin.
    pub payload: String,
    /// When the payload was last fetched or confirmed unchanged.
    pub fetched_at: DateTime<Utc>,
    /// ETag from the origin, if any.
    pub etag: Option<String>,
    /// How long the entry is served without asking the origin.
    pub freshness: Duration,
}

impl CacheEntry {
    /// Create an entry fetched now.
    pub fn new(payload: impl Into<String>, etag: Option<String>, freshness: Duration) -> Self {
        Self {
            payload: payload.into(),
            fetched_at: Utc::now(),
            etag,
            freshness,
        }
    }

    /// Get the age of this entry.
    pub fn age(&self) -> chrono::Duration {
        Utc::now().signed_duration_since(self.fetched_at)
    }

    /// Whether the entry is still inside its freshness window.
    pub fn is_fresh(&self) -> bool {
        // A clock step backwards yields a negative age; treat it as zero.
        self.age().to_std().unwrap_or_default() < self.freshness
    }

    /// Mark the payload as confirmed by the origin.
    pub fn touch(&mut self) {
        self.fetched_at = Utc::now();
    }
}
