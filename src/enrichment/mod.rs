//! Enrichment core: pure domain types and concurrent lookup services.

pub mod domain;
pub mod services;
