//! Source enrichment.
//!
//! This module provides:
//! - The source data model ([`ParsedSource`], [`BackendEnrichedSource`], [`EnrichedSource`])
//! - The enrichment mapper ([`map_enriched_source`])
//! - [`SourceEnricher`], the batch enrichment service
//!
//! The backend may reorder, drop or fail to enrich individual references
//! without failing the batch. Callers correlate results by `id`, never by
//! position; [`EnrichmentOutcome::missing_ids`] reports the gaps.

mod mapping;
mod types;

pub use mapping::{canonical_reference_url, map_enriched_source, DOI_RESOLVER};
pub use types::{BackendEnrichedSource, EnrichResult, EnrichStats, EnrichedSource, ParsedSource};

use std::collections::HashSet;

use crate::error::ApiError;
use crate::traits::EvidenceApi;

/// Mapped sources plus the backend's batch statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentOutcome {
    /// Enriched sources, in backend order.
    pub sources: Vec<EnrichedSource>,
    /// Batch statistics as reported by the backend.
    pub stats: EnrichStats,
}

impl EnrichmentOutcome {
    /// Ids of requested references that came back unenriched.
    #[must_use]
    pub fn missing_ids(&self, requested: &[ParsedSource]) -> Vec<String> {
        let returned: HashSet<&str> = self.sources.iter().map(|s| s.id.as_str()).collect();
        requested
            .iter()
            .filter(|p| !returned.contains(p.id.as_str()))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Look up an enriched source by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&EnrichedSource> {
        self.sources.iter().find(|s| s.id == id)
    }
}

/// Batch enrichment service.
pub struct SourceEnricher<C>
where
    C: EvidenceApi,
{
    client: C,
}

impl<C> SourceEnricher<C>
where
    C: EvidenceApi,
{
    /// Create a new enricher.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Enrich references and return the mapped sources in backend order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn enrich_sources(
        &self,
        parsed: Vec<ParsedSource>,
    ) -> Result<Vec<EnrichedSource>, ApiError> {
        Ok(self.enrich_with_stats(parsed).await?.sources)
    }

    /// Enrich references, keeping the batch statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn enrich_with_stats(
        &self,
        parsed: Vec<ParsedSource>,
    ) -> Result<EnrichmentOutcome, ApiError> {
        let requested_ids: Vec<String> = parsed.iter().map(|p| p.id.clone()).collect();
        let result = self.client.enrich_sources(parsed).await?;

        let outcome = EnrichmentOutcome {
            sources: result
                .enriched
                .into_iter()
                .map(map_enriched_source)
                .collect(),
            stats: result.stats,
        };

        let returned: HashSet<&str> = outcome.sources.iter().map(|s| s.id.as_str()).collect();
        let missing = requested_ids
            .iter()
            .filter(|id| !returned.contains(id.as_str()))
            .count();

        if missing > 0 || outcome.stats.dropped_count() > 0 {
            tracing::warn!(
                requested = requested_ids.len(),
                enriched = outcome.sources.len(),
                missing,
                dropped = outcome.stats.dropped_count(),
                "Enrichment returned fewer sources than requested"
            );
        } else {
            tracing::debug!(
                enriched = outcome.sources.len(),
                with_abstract = outcome.stats.with_abstract,
                needs_review = outcome.stats.needs_review_count,
                "Enrichment complete"
            );
        }

        Ok(outcome)
    }
}
