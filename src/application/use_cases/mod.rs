pub mod enrich_sbom;

pub use enrich_sbom::EnrichSbomUseCase;
