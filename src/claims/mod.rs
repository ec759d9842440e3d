//! Claims analysis.
//!
//! [`ClaimsAnalyzer`] shapes an analysis request from a thesis, its claims
//! and an evidence pool, sends it, and hands back the backend's ranked
//! results untouched.
//!
//! # Ordering
//!
//! `results[i]` answers `claims[i]`, and every evidence list is already
//! ranked. The analyzer logs deviations from that contract but never
//! repairs them.
//!
//! # Staleness
//!
//! [`ClaimsAnalyzer::analyze_latest`] tags each call with a
//! [`RequestTicket`]. When a newer call has been issued by the time a
//! response arrives, the older response is discarded and `None` returned.

mod ticket;
mod types;

pub use ticket::{RequestSequencer, RequestTicket};
pub use types::{
    AnalyzeMeta, ClaimAnalyzeRequest, ClaimAnalyzeResponse, ClaimResult, EvidenceHit,
    ExternalEvidenceItem, PROQUEST_SOURCE_KIND,
};

use crate::error::ApiError;
use crate::sources::EnrichedSource;
use crate::traits::EvidenceApi;

/// Claims analysis orchestrator.
pub struct ClaimsAnalyzer<C>
where
    C: EvidenceApi,
{
    client: C,
    sequencer: RequestSequencer,
}

impl<C> ClaimsAnalyzer<C>
where
    C: EvidenceApi,
{
    /// Create a new analyzer.
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            client,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Create an analyzer that shares a sequencer with other analyzers.
    #[must_use]
    pub const fn with_sequencer(client: C, sequencer: RequestSequencer) -> Self {
        Self { client, sequencer }
    }

    /// The sequencer used by [`Self::analyze_latest`].
    #[must_use]
    pub const fn sequencer(&self) -> &RequestSequencer {
        &self.sequencer
    }

    /// Build and send a request from canonical sources.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn analyze_claims(
        &self,
        thesis: impl Into<String> + Send,
        claims: Vec<String>,
        sources: &[EnrichedSource],
        proquest_evidence: Option<Vec<ExternalEvidenceItem>>,
    ) -> Result<ClaimAnalyzeResponse, ApiError> {
        let mut request = ClaimAnalyzeRequest::new(thesis, claims, sources);
        if let Some(items) = proquest_evidence {
            request = request.with_proquest_evidence(items);
        }
        self.analyze(request).await
    }

    /// Send a prepared request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn analyze(
        &self,
        request: ClaimAnalyzeRequest,
    ) -> Result<ClaimAnalyzeResponse, ApiError> {
        let claims = request.claims.clone();

        tracing::debug!(
            claims = claims.len(),
            sources = request.sources.len(),
            pool = request.pool_size(),
            "Starting claims analysis"
        );

        let response = self.client.analyze_claims(request).await?;
        check_contract(&claims, &response);

        tracing::debug!(
            results = response.results.len(),
            model = %response.meta.model,
            per_claim_calls = response.meta.per_claim_calls,
            sources_considered = response.meta.sources_considered,
            "Claims analysis complete"
        );

        Ok(response)
    }

    /// Send a request, discarding the response if a newer call was issued.
    ///
    /// Returns `Ok(None)` when the response is stale.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails, stale or not.
    pub async fn analyze_latest(
        &self,
        request: ClaimAnalyzeRequest,
    ) -> Result<Option<ClaimAnalyzeResponse>, ApiError> {
        let ticket = self.sequencer.issue();
        let response = self.analyze(request).await?;

        if self.sequencer.is_current(&ticket) {
            Ok(Some(response))
        } else {
            tracing::debug!(
                sequence = ticket.sequence(),
                latest = self.sequencer.latest(),
                age_ms = ticket.age_ms(),
                "Discarding stale analysis response"
            );
            Ok(None)
        }
    }
}

/// Log, without altering, any break in the ordering contract.
fn check_contract(claims: &[String], response: &ClaimAnalyzeResponse) {
    if let Some(index) = response.first_misaligned(claims) {
        tracing::warn!(
            expected = claims.len(),
            received = response.results.len(),
            index,
            "Analysis results do not line up with the requested claims"
        );
    }

    let misplaced: usize = response.results.iter().map(ClaimResult::misplaced_hits).sum();
    if misplaced > 0 {
        tracing::warn!(misplaced, "Evidence hits returned under a non-matching stance list");
    }
}
