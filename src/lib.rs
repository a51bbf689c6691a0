//! sbom-enrich - CycloneDX SBOM enrichment tool
//!
//! This library enriches CycloneDX JSON documents with package metadata
//! (descriptions and license expressions) fetched from the ecosyste.ms
//! registry index, following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`enrichment`): Registry key mapping and metadata models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_enrich::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemReader::new();
//! let package_repository = CachingPackageRepository::new(EcosystemsClient::new()?);
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = EnrichSbomUseCase::new(document_reader, package_repository, progress_reporter);
//!
//! // Execute
//! let request = EnrichRequest::new(DocumentSource::from_arg("sbom.json"), 20);
//! let response = use_case.execute(request).await?;
//!
//! // Present output
//! let output = sbom_enrich::cyclonedx::encode(&response.bom)?;
//! let presenter = StdoutPresenter::new();
//! presenter.present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cyclonedx;
pub mod enrichment;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{CachingPackageRepository, EcosystemsClient};
    pub use crate::application::dto::{EnrichRequest, EnrichResponse};
    pub use crate::application::use_cases::EnrichSbomUseCase;
    pub use crate::cyclonedx::{Bom, Component, LicenseChoice};
    pub use crate::enrichment::domain::{PackageMetadata, RegistryKey};
    pub use crate::enrichment::services::fetch_packages_by_id;
    pub use crate::ports::outbound::{
        DocumentReader, DocumentSource, OutputPresenter, PackageRepository, ProgressReporter,
    };
    pub use crate::shared::Result;
}
