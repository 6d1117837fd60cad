use async_trait::async_trait;
use basalt::domain::CacheEntry;
use basalt::ports::CacheStore;
use shared::config::StoreConfig;
use shared::{Error, Result};
use std::time::Duration;

/// Durable cache backend over an externally-provisioned sled tree.
///
/// Each row maps the cache key to a JSON-encoded entry carrying the value
/// and its absolute expiry, the embedded equivalent of a relational "value
/// plus expiry column" table. Expiry is decided in code against the single
/// read of the row, so an expired row can never yield its value; cleanup of
/// the row itself is best effort.
#[derive(Clone)]
pub struct SledStore {
    tree: sled::Tree,
}

impl SledStore {
    /// Wrap an already-opened tree. Provisioning the database and tree is
    /// the caller's concern.
    pub fn new(tree: sled::Tree) -> Self {
        Self { tree }
    }

    /// Open the database and tree named by `config`.
    pub fn open(config: &StoreConfig) -> sled::Result<Self> {
        let db = sled::open(&config.data_dir)?;
        let tree = db.open_tree(&config.tree)?;
        Ok(Self::new(tree))
    }
}

#[async_trait]
impl CacheStore for SledStore {
    async fn save(&self, key: &str, value: &str, lifetime: Duration) -> Result<()> {
        let entry = CacheEntry::new(value, lifetime);
        let bytes = serde_json::to_vec(&entry).map_err(|e| Error::SaveFailed(e.into()))?;

        self.tree
            .insert(key, bytes)
            .map_err(|e| Error::SaveFailed(e.into()))?;

        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<String> {
        let row = self.tree.get(key).map_err(|e| Error::FetchFailed(e.into()))?;
        let Some(bytes) = row else {
            return Err(Error::KeyNotFound);
        };

        let entry: CacheEntry =
            serde_json::from_slice(&bytes).map_err(|e| Error::FetchFailed(e.into()))?;

        if entry.expires_at.is_expired() {
            // the expired value is withheld whether or not the row cleanup lands
            if let Err(e) = self.tree.remove(key) {
                tracing::warn!(key, error = %e, "failed to drop expired entry");
            }
            return Err(Error::CacheExpired);
        }

        Ok(entry.value)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.tree
            .remove(key)
            .map_err(|e| Error::DeleteFailed(e.into()))?;

        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        self.tree.clear().map_err(|e| Error::FlushFailed(e.into()))?;

        Ok(())
    }
}

impl std::fmt::Debug for SledStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledStore")
            .field("tree", &self.tree.name())
            .finish()
    }
}
