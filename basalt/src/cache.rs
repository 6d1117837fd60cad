use crate::ports::CacheStore;
use shared::Result;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Caller-facing cache handle.
///
/// Wraps whichever backend was selected at construction and dispatches the
/// six contract operations to it; exactly one backend is active per
/// instance and it is never switched at runtime. Cloning is cheap and
/// clones share the same backend.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn CacheStore>,
}

impl Cache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub async fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<()> {
        self.store.save(key, value, lifetime).await
    }

    pub async fn fetch(&self, key: &str) -> Result<String> {
        self.store.fetch(key).await
    }

    pub async fn fetch_multi(&self, keys: &[&str]) -> HashMap<String, String> {
        self.store.fetch_multi(keys).await
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.store.contains(key).await
    }

    pub async fn delete(&self, key: &str) -> Result<()> {
        self.store.delete(key).await
    }

    pub async fn flush(&self) -> Result<()> {
        self.store.flush().await
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("store", &"<dyn CacheStore>")
            .finish()
    }
}
