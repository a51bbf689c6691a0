use crate::cyclonedx::Bom;

/// EnrichResponse - Internal response DTO from the enrich use case
///
/// Carries the enriched document plus aggregate counts for progress
/// reporting. Per-component outcomes are not reported; unresolvable
/// components are emitted unchanged.
#[derive(Debug, Clone)]
pub struct EnrichResponse {
    /// The document with enrichment applied
    pub bom: Bom,
    /// How many components received at least one metadata field
    pub enriched_count: usize,
    /// How many components the document listed
    pub total_components: usize,
}

impl EnrichResponse {
    pub fn new(bom: Bom, enriched_count: usize, total_components: usize) -> Self {
        Self {
            bom,
            enriched_count,
            total_components,
        }
    }
}
