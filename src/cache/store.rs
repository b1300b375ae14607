//! In-memory conditional cache.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, TryLockError};
use std::time::Duration;

use super::entry::CacheEntry;
use super::revalidation::{Origin, OriginResponse};
use crate::error::{GistError, Result};

/// Per-key state. Its mutex is held for the whole of that key's fetch.
#[derive(Debug, Default)]
struct Slot {
    entry: Option<CacheEntry>,
}

/// Caches provider payloads by key with a freshness window and ETag revalidation.
///
/// Callers asking for the same key while a fetch is in flight wait for it and
/// then see its result, so one key costs at most one origin call at a time.
/// Different keys never wait on each other.
#[derive(Debug)]
pub struct ConditionalCache {
    freshness: Duration,
    slots: RwLock<HashMap<String, Arc<Mutex<Slot>>>>,
}

impl ConditionalCache {
    /// Create a cache whose new entries stay fresh for `freshness`.
    pub fn new(freshness: Duration) -> Self {
        Self {
            freshness,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// The freshness window applied to new entries.
    pub fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Return the payload for `key`, asking `origin` only when needed.
    ///
    /// A fresh entry is returned as is. A stale entry is revalidated with its
    /// ETag. On an origin error the existing entry is left untouched.
    pub fn get_or_fetch<O>(&self, key: &str, origin: &O) -> Result<String>
    where
        O: Origin + ?Sized,
    {
        let cell = self.slot(key)?;
        let mut slot = lock(&cell, key)?;

        if let Some(entry) = slot.entry.as_ref().filter(|e| e.is_fresh()) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(entry.payload.clone());
        }

        let validator = slot.entry.as_ref().and_then(|e| e.etag.clone());
        tracing::debug!("Fetching {} (validator: {:?})", key, validator);

        let response = origin.fetch(validator.as_deref()).inspect_err(|e| {
            tracing::warn!("Fetch for {} failed: {}", key, e);
        })?;

        match response {
            OriginResponse::NotModified => match slot.entry.as_mut() {
                Some(entry) => {
                    tracing::debug!("{} not modified, refreshing", key);
                    entry.touch();
                    Ok(entry.payload.clone())
                }
                None => {
                    tracing::error!("Origin reported {} unchanged but nothing is cached", key);
                    Err(GistError::CacheConsistency {
                        key: key.to_string(),
                        message: "not modified without a cached entry".to_string(),
                    })
                }
            },
            OriginResponse::Modified { body, etag } => {
                let entry = CacheEntry::new(body, etag, self.freshness);
                let payload = entry.payload.clone();
                slot.entry = Some(entry);
                Ok(payload)
            }
        }
    }

    /// A snapshot of the entry for `key`.
    ///
    /// Waits for an in-flight fetch of the same key.
    pub fn peek(&self, key: &str) -> Option<CacheEntry> {
        let slot = self.slots.read().ok()?.get(key).cloned()?;
        let slot = slot.lock().ok()?;
        slot.entry.clone()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.snapshot()
            .iter()
            .filter(|slot| slot.lock().map(|s| s.entry.is_some()).unwrap_or(false))
            .count()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        if let Ok(mut slots) = self.slots.write() {
            slots.clear();
        }
    }

    /// Remove entries fetched more than `max_age` ago, returning how many went.
    ///
    /// Keys with a fetch in flight are skipped.
    pub fn sweep(&self, max_age: Duration) -> usize {
        let Ok(mut slots) = self.slots.write() else {
            return 0;
        };

        let mut removed = 0;
        slots.retain(|key, cell| {
            let slot = match cell.try_lock() {
                Ok(slot) => slot,
                Err(TryLockError::WouldBlock) => return true,
                Err(TryLockError::Poisoned(_)) => return false,
            };

            match &slot.entry {
                Some(entry) if entry.age().to_std().unwrap_or_default() > max_age => {
                    tracing::debug!("Sweeping {}", key);
                    removed += 1;
                    false
                }
                Some(_) => true,
                None => false,
            }
        });

        removed
    }

    fn slot(&self, key: &str) -> Result<Arc<Mutex<Slot>>> {
        if let Some(slot) = self
            .slots
            .read()
            .map_err(|_| poisoned(key))?
            .get(key)
        {
            return Ok(Arc::clone(slot));
        }

        let mut slots = self.slots.write().map_err(|_| poisoned(key))?;
        Ok(Arc::clone(slots.entry(key.to_string()).or_default()))
    }

    fn snapshot(&self) -> Vec<Arc<Mutex<Slot>>> {
        self.slots
            .read()
            .map(|slots| slots.values().cloned().collect())
            .unwrap_or_default()
    }
}

fn lock<'a>(slot: &'a Mutex<Slot>, key: &str) -> Result<MutexGuard<'a, Slot>> {
    slot.lock().map_err(|_| poisoned(key))
}

fn poisoned(key: &str) -> GistError {
    tracing::error!("Cache lock for {} is poisoned", key);
    GistError::CacheConsistency {
        key: key.to_string(),
        message: "lock poisoned by a panicking fetch".to_string(),
    }
}
