#![deny(clippy::all)]

use async_trait::async_trait;
use shared::Result;
use std::collections::HashMap;
use std::time::Duration;

// Ports are the pluggable extension points for underlying cache backends

/// Port for cache storage backends.
///
/// Every backend exposes the same six operations with identical expiration
/// semantics: expiry is evaluated lazily at access time, never by a
/// background sweeper, and an access that observes an expired entry must not
/// yield its value. In-process backends never fail with the I/O kinds;
/// durable backends wrap their driver's failures into the shared taxonomy
/// and must not leak driver error types through this trait.
#[async_trait]
pub trait CacheStore: Send + Sync + 'static {
    /// Store `value` under `key`, unconditionally overwriting any existing
    /// entry. A zero `lifetime` means the entry never expires.
    async fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<()>;

    /// Retrieve the value stored under `key`.
    ///
    /// Fails with `Error::KeyNotFound` when no entry exists and with
    /// `Error::CacheExpired` when the entry's lifetime has elapsed; an
    /// observed-expired entry is removed as a side effect.
    async fn fetch(&self, key: &str) -> Result<String>;

    /// Remove any entry stored under `key`. Deleting an absent key is not
    /// an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Discard every entry in the store.
    async fn flush(&self) -> Result<()>;

    /// Whether a fetch of `key` would currently succeed.
    ///
    /// Delegates to `fetch`, so probing an expired entry removes it just as
    /// fetching it would.
    async fn contains(&self, key: &str) -> bool {
        self.fetch(key).await.is_ok()
    }

    /// Retrieve several keys at once, best effort.
    ///
    /// Each key gets the plain `fetch` treatment; keys that are absent,
    /// expired or erroring are left out of the result rather than surfaced,
    /// so the result may be smaller than the input.
    async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        let mut result = HashMap::new();

        for key in keys {
            if let Ok(value) = self.fetch(key).await {
                result.insert((*key).to_string(), value);
            }
        }

        result
    }
}
