use crate::ports::outbound::DocumentSource;

/// EnrichRequest - Internal request DTO for the enrich use case
///
/// This DTO represents the internal request structure used within
/// the application layer.
#[derive(Debug, Clone)]
pub struct EnrichRequest {
    /// Where to read the SBOM document from
    pub source: DocumentSource,
    /// Maximum number of registry lookups in flight at once
    pub concurrency: usize,
}

impl EnrichRequest {
    pub fn new(source: DocumentSource, concurrency: usize) -> Self {
        Self {
            source,
            concurrency,
        }
    }
}
