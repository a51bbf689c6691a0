use crate::enrichment::domain::{PackageMetadata, RegistryKey};
use crate::ports::outbound::PackageRepository;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://packages.ecosyste.ms/api/v1";

/// Subset of the ecosyste.ms registry package response the tool consumes
#[derive(Debug, Deserialize)]
struct RegistryPackage {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    licenses: Option<String>,
}

/// EcosystemsClient adapter for fetching package metadata from ecosyste.ms
///
/// This adapter implements the PackageRepository port, providing async
/// network access to the ecosyste.ms registry package API.
///
/// ecosyste.ms also offers a purl-based lookup endpoint, but it is
/// noticeably slower, so the purl is broken down to registry and name
/// values locally (see `RegistryKey`) and the registry endpoint is used.
pub struct EcosystemsClient {
    client: reqwest::Client,
    api_base: String,
    max_retries: u32,
}

impl EcosystemsClient {
    /// Creates a new ecosyste.ms client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Creates a client against a custom API base URL (used by tests)
    pub fn with_api_base(api_base: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("sbom-enrich/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into(),
            max_retries: 3,
        })
    }

    /// Fetches a registry package with transport-level retry (async).
    ///
    /// A 404 is a definitive "no data" answer and is never retried.
    async fn fetch_with_retry(&self, key: &RegistryKey) -> Result<Option<RegistryPackage>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_from_api(key).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Fetches a registry package from the ecosyste.ms API (async)
    async fn fetch_from_api(&self, key: &RegistryKey) -> Result<Option<RegistryPackage>> {
        let url = format!(
            "{}/registries/{}/packages/{}",
            self.api_base,
            key.registry(),
            key.name()
        );

        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            anyhow::bail!(
                "ecosyste.ms API returned status code {}",
                response.status()
            );
        }

        let package: RegistryPackage = response.json().await?;
        Ok(Some(package))
    }
}

#[async_trait]
impl PackageRepository for EcosystemsClient {
    async fn fetch_package(&self, key: &RegistryKey) -> Result<Option<PackageMetadata>> {
        // Keys for purl types outside the registry table are unresolvable;
        // answer locally instead of asking the API for an empty registry.
        if !key.is_resolvable() {
            return Ok(None);
        }

        let package = self.fetch_with_retry(key).await?;
        Ok(package.map(|p| PackageMetadata::new(p.description, p.licenses)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use packageurl::PackageUrl;
    use std::str::FromStr;

    #[test]
    fn test_client_creation() {
        let client = EcosystemsClient::new();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unresolvable_key_short_circuits_without_network() {
        // api_base is unroutable; the call must still succeed with None
        let client = EcosystemsClient::with_api_base("http://127.0.0.1:1").unwrap();
        let purl = PackageUrl::from_str("pkg:deb/foo@1.0").unwrap();
        let key = RegistryKey::from_purl(&purl);

        let result = client.fetch_package(&key).await.unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_registry_package_deserialize_full() {
        let json = r#"{
            "name": "requests",
            "description": "Python HTTP for Humans.",
            "licenses": "Apache-2.0",
            "downloads": 12345
        }"#;
        let package: RegistryPackage = serde_json::from_str(json).unwrap();
        assert_eq!(package.description.as_deref(), Some("Python HTTP for Humans."));
        assert_eq!(package.licenses.as_deref(), Some("Apache-2.0"));
    }

    #[test]
    fn test_registry_package_deserialize_sparse() {
        let json = r#"{"name": "obscure-package"}"#;
        let package: RegistryPackage = serde_json::from_str(json).unwrap();
        assert!(package.description.is_none());
        assert!(package.licenses.is_none());
    }

    #[test]
    fn test_registry_package_deserialize_null_fields() {
        let json = r#"{"description": null, "licenses": null}"#;
        let package: RegistryPackage = serde_json::from_str(json).unwrap();
        assert!(package.description.is_none());
        assert!(package.licenses.is_none());
    }

    // Integration tests - require network access
    // Uncomment to run with the real ecosyste.ms API
    // #[tokio::test]
    // async fn test_fetch_package_real() {
    //     let client = EcosystemsClient::new().unwrap();
    //     let purl = PackageUrl::from_str("pkg:pypi/requests@2.31.0").unwrap();
    //     let key = RegistryKey::from_purl(&purl);
    //     let metadata = client.fetch_package(&key).await.unwrap();
    //     assert!(metadata.is_some());
    // }
}
