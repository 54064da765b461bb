use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur with cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Cache miss: {0}")]
    CacheMiss(String),
}

/// In-process TTL cache for the venue catalog
///
/// The hotels and halls tables are fetched in full on every recommendation
/// run; this cache fronts those two queries so concurrent requests do not
/// refetch an unchanged catalog. Per-user event queries are never cached.
pub struct CatalogCache {
    entries: moka::future::Cache<String, Vec<u8>>,
}

impl CatalogCache {
    /// Create a new catalog cache with the given capacity and TTL
    pub fn new(max_entries: u64, ttl_secs: u64) -> Self {
        let entries = moka::future::CacheBuilder::new(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { entries }
    }

    /// Get a value from the cache
    pub async fn get<T>(&self, key: &str) -> Result<T, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(bytes) = self.entries.get(key).await {
            tracing::trace!("Cache hit: {}", key);
            return Ok(serde_json::from_slice(&bytes)?);
        }

        tracing::trace!("Cache miss: {}", key);
        Err(CacheError::CacheMiss(key.to_string()))
    }

    /// Set a value in the cache
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec(value)?;
        self.entries.insert(key.to_string(), bytes).await;
        tracing::trace!("Cache set: {}", key);
        Ok(())
    }

    /// Drop all cached entries
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Key for the full hotel catalog
    pub fn hotels() -> String {
        "catalog:hotels".to_string()
    }

    /// Key for the full hall catalog
    pub fn halls() -> String {
        "catalog:halls".to_string()
    }
}
