//! Domain model for SBOM enrichment: registry lookup keys and the
//! metadata payload fetched for a package.

pub mod metadata;
pub mod registry;

pub use metadata::PackageMetadata;
pub use registry::RegistryKey;
