use sbom_enrich::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock PackageRepository for testing, keyed by the encoded package name
pub struct MockPackageRepository {
    pub packages: HashMap<String, PackageMetadata>,
    pub should_fail: bool,
    pub call_count: AtomicUsize,
}

impl MockPackageRepository {
    pub fn new() -> Self {
        Self {
            packages: HashMap::new(),
            should_fail: false,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_package(mut self, name: &str, description: &str, licenses: &str) -> Self {
        self.packages.insert(
            name.to_string(),
            PackageMetadata::new(
                Some(description.to_string()),
                Some(licenses.to_string()),
            ),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            packages: HashMap::new(),
            should_fail: true,
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl Default for MockPackageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PackageRepository for MockPackageRepository {
    async fn fetch_package(&self, key: &RegistryKey) -> Result<Option<PackageMetadata>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.should_fail {
            anyhow::bail!("Mock package repository failure");
        }

        Ok(self.packages.get(key.name()).cloned())
    }
}
