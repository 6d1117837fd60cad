use async_trait::async_trait;
use basalt::domain::CacheEntry;
use basalt::ports::CacheStore;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use shared::{Error, Result};
use std::time::Duration;

/// In-process concurrent cache backend.
///
/// Entries live in a `DashMap`, which gives atomic per-key load, store and
/// delete without cross-key blocking. The map sits behind a read-write lock
/// only so that `flush` can swap in a fresh map wholesale: writers racing
/// with a flush observe either the pre-flush or the post-flush map, never a
/// half-cleared one.
///
/// Expiration is evaluated lazily at access time; there is no background
/// sweeper. Save, delete and flush never fail for this backend.
pub struct MemoryStore {
    entries: RwLock<DashMap<String, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(DashMap::new()),
        }
    }

    fn read(&self, key: &str) -> Result<String> {
        let entries = self.entries.read();
        let now = Utc::now().timestamp();

        {
            let Some(entry) = entries.get(key) else {
                return Err(Error::KeyNotFound);
            };
            if !entry.expires_at.is_expired_at(now) {
                return Ok(entry.value.clone());
            }
        } // release the shard guard before touching the same key again

        // Re-check under the removal so a save that raced in stays put.
        entries.remove_if(key, |_, entry| entry.expires_at.is_expired_at(now));
        tracing::debug!(key, "dropped expired entry on access");

        Err(Error::CacheExpired)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<()> {
        self.entries
            .read()
            .insert(key.to_string(), CacheEntry::new(value, lifetime));
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<String> {
        self.read(key)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.entries.read().remove(key);
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        *self.entries.write() = DashMap::new();
        Ok(())
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.entries.read().len())
            .finish()
    }
}
