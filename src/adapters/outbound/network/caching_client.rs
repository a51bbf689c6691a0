use crate::enrichment::domain::{PackageMetadata, RegistryKey};
use crate::ports::outbound::PackageRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingPackageRepository wraps a PackageRepository and adds in-memory caching.
///
/// Large SBOMs routinely list the same package several times (different
/// versions share a registry key), so caching successful answers per key
/// avoids repeated API calls within one run. The cache is thread-safe and
/// suitable for concurrent access; lookup errors are not cached, so a
/// transient failure does not poison later lookups of the same key.
pub struct CachingPackageRepository<R: PackageRepository> {
    inner: R,
    cache: Arc<DashMap<RegistryKey, Option<PackageMetadata>>>,
}

impl<R: PackageRepository> CachingPackageRepository<R> {
    /// Creates a new caching repository wrapping the given inner repository
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: PackageRepository> PackageRepository for CachingPackageRepository<R> {
    async fn fetch_package(&self, key: &RegistryKey) -> Result<Option<PackageMetadata>> {
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached.clone());
        }

        let metadata = self.inner.fetch_package(key).await?;
        self.cache.insert(key.clone(), metadata.clone());

        Ok(metadata)
    }
}
