use crate::enrichment::domain::{PackageMetadata, RegistryKey};
use crate::shared::Result;
use async_trait::async_trait;

/// PackageRepository port for looking up package metadata
///
/// This port abstracts the external registry aggregation service
/// (e.g. the ecosyste.ms API) that serves descriptive metadata for a
/// registry lookup key.
///
/// # Async Support
/// All methods are async so the enrichment engine can drive many lookups
/// concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Fetches metadata for the package addressed by `key`
    ///
    /// # Returns
    /// - `Ok(Some(metadata))` when the registry knows the package
    /// - `Ok(None)` when the registry has no data for it (including keys
    ///   with an empty registry domain)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails
    /// - The API returns an unexpected status code
    /// - The response cannot be parsed
    ///
    /// Callers in the enrichment engine treat `Err(_)` and `Ok(None)`
    /// identically: the affected component is passed through unchanged.
    async fn fetch_package(&self, key: &RegistryKey) -> Result<Option<PackageMetadata>>;
}
