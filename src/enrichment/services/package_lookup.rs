use crate::enrichment::domain::{PackageMetadata, RegistryKey};
use crate::ports::outbound::PackageRepository;
use futures::stream::{self, StreamExt};
use packageurl::PackageUrl;
use std::collections::HashMap;
use std::str::FromStr;
use tokio::sync::Mutex;

/// Looks up metadata for a batch of purls keyed by caller-assigned IDs.
///
/// Lookups run with at most `concurrency` requests in flight. The result
/// map only contains entries for IDs whose purl parsed and whose lookup
/// returned a payload; malformed purls and lookup failures are silently
/// skipped. Inserts into the shared result map are serialized
/// through a mutex since completions land in arbitrary order.
pub async fn fetch_packages_by_id<R: PackageRepository>(
    repository: &R,
    purls_by_id: &HashMap<String, String>,
    concurrency: usize,
) -> HashMap<String, PackageMetadata> {
    let results = Mutex::new(HashMap::new());

    stream::iter(purls_by_id.iter())
        .for_each_concurrent(Some(concurrency.max(1)), |(id, purl)| {
            let results = &results;
            async move {
                let Ok(parsed) = PackageUrl::from_str(purl) else {
                    return;
                };
                let key = RegistryKey::from_purl(&parsed);
                if let Ok(Some(metadata)) = repository.fetch_package(&key).await {
                    results.lock().await.insert(id.clone(), metadata);
                }
            }
        })
        .await;

    results.into_inner()
}
