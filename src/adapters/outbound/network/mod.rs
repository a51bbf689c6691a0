pub mod caching_client;
pub mod ecosystems_client;

pub use caching_client::CachingPackageRepository;
pub use ecosystems_client::EcosystemsClient;
