use crate::application::dto::{EnrichRequest, EnrichResponse};
use crate::cyclonedx::{self, Component, LicenseChoice};
use crate::enrichment::domain::RegistryKey;
use crate::ports::outbound::{DocumentReader, PackageRepository, ProgressReporter};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use packageurl::PackageUrl;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

/// EnrichSbomUseCase - Core use case for SBOM enrichment
///
/// Decodes the document, drives bounded-concurrency registry lookups for
/// every component, merges the fetched metadata into a copy of each
/// component and re-assembles the document in input order.
///
/// # Type Parameters
/// * `DR` - DocumentReader implementation
/// * `REPO` - PackageRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct EnrichSbomUseCase<DR, REPO, PR> {
    document_reader: DR,
    package_repository: REPO,
    progress_reporter: PR,
}

impl<DR, REPO, PR> EnrichSbomUseCase<DR, REPO, PR>
where
    DR: DocumentReader,
    REPO: PackageRepository,
    PR: ProgressReporter,
{
    /// Creates a new EnrichSbomUseCase with injected dependencies
    pub fn new(document_reader: DR, package_repository: REPO, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            package_repository,
            progress_reporter,
        }
    }

    /// Executes the enrichment use case
    ///
    /// Reading or decoding the document is fatal and aborts the run.
    /// Everything after that is best-effort: the response always carries
    /// a complete document, with unresolvable components unchanged.
    pub async fn execute(&self, request: EnrichRequest) -> Result<EnrichResponse> {
        let raw = self.document_reader.read_document(&request.source)?;
        let mut bom = cyclonedx::decode(&raw)?;

        let Some(components) = bom.components.take() else {
            self.progress_reporter
                .report("ℹ️  Document lists no components; nothing to enrich");
            return Ok(EnrichResponse::new(bom, 0, 0));
        };

        let total = components.len();
        self.progress_reporter
            .report(&format!("🔍 Enriching {} component(s)...", total));

        let (components, enriched_count) = self
            .enrich_components(components, request.concurrency)
            .await;
        bom.components = Some(components);

        self.progress_reporter.report_completion(&format!(
            "✅ Enrichment complete: {} of {} component(s) enriched",
            enriched_count, total
        ));

        Ok(EnrichResponse::new(bom, enriched_count, total))
    }

    /// Enriches a collection of components with bounded concurrency.
    ///
    /// At most `concurrency` lookups are in flight at any moment. Each
    /// task owns its component copy and reports its outcome together with
    /// the component's input index; completions land in arbitrary order
    /// and are fanned back into a pre-sized slot vector, so the returned
    /// collection matches the input positionally regardless of timing.
    ///
    /// Never fails: per-component problems (malformed purl, lookup error,
    /// empty payload) leave that component unchanged. Returns the output
    /// collection and the number of components that received metadata.
    pub async fn enrich_components(
        &self,
        components: Vec<Component>,
        concurrency: usize,
    ) -> (Vec<Component>, usize) {
        let total = components.len();
        if total == 0 {
            return (components, 0);
        }

        let limit = concurrency.max(1);
        let completed = AtomicUsize::new(0);

        let outcomes: Vec<(usize, Component, bool)> =
            stream::iter(components.into_iter().enumerate())
                .map(|(index, component)| {
                    let completed = &completed;
                    async move {
                        let (component, enriched) = self.enrich_component(component).await;
                        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                        self.progress_reporter.report_progress(done, total, None);
                        (index, component, enriched)
                    }
                })
                .buffer_unordered(limit)
                .collect()
                .await;

        let mut slots: Vec<Option<Component>> =
            std::iter::repeat_with(|| None).take(total).collect();
        let mut enriched_count = 0;
        for (index, component, enriched) in outcomes {
            if enriched {
                enriched_count += 1;
            }
            // Indices are unique, so every slot is written exactly once
            slots[index] = Some(component);
        }

        (slots.into_iter().flatten().collect(), enriched_count)
    }

    /// Enriches a single component, absorbing every per-item failure.
    ///
    /// Returns the (possibly modified) component and whether metadata
    /// was applied.
    async fn enrich_component(&self, component: Component) -> (Component, bool) {
        let Some(purl) = component.purl.clone() else {
            return (component, false);
        };
        let Ok(parsed) = PackageUrl::from_str(&purl) else {
            return (component, false);
        };
        let key = RegistryKey::from_purl(&parsed);

        match self.package_repository.fetch_package(&key).await {
            Ok(Some(metadata)) if !metadata.is_empty() => {
                let mut enriched = component;
                if let Some(description) = metadata.description {
                    enriched.description = Some(description);
                }
                if let Some(expression) = metadata.licenses {
                    // The fetched expression replaces the license set
                    // wholesale; prior entries are dropped, not merged.
                    enriched.licenses = Some(vec![LicenseChoice::expression(expression)]);
                }
                (enriched, true)
            }
            _ => (component, false),
        }
    }
}
