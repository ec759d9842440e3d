//! Trait definitions for mockable dependencies.
//!
//! [`EvidenceApi`] abstracts the evidence backend so the service layer
//! ([`SourceEnricher`](crate::sources::SourceEnricher),
//! [`DiscoveryService`](crate::discovery::DiscoveryService),
//! [`ClaimsAnalyzer`](crate::claims::ClaimsAnalyzer)) can be driven by a mock
//! in tests and by [`EvidenceClient`](crate::api::EvidenceClient) in production.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates a mock implementation for unit tests.

use async_trait::async_trait;

use crate::claims::{ClaimAnalyzeRequest, ClaimAnalyzeResponse};
use crate::discovery::{SearchQuery, SearchResponse, SuggestionsResolveResponse};
use crate::error::ApiError;
use crate::sources::{EnrichResult, ParsedSource};

/// Evidence backend operations, one network round trip each.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EvidenceApi: Send + Sync {
    /// Enrich a batch of parsed references with bibliographic metadata.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    async fn enrich_sources(&self, sources: Vec<ParsedSource>) -> Result<EnrichResult, ApiError>;

    /// Run a filtered keyword search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    async fn search_openalex(&self, query: SearchQuery) -> Result<SearchResponse, ApiError>;

    /// Resolve free-text citation fragments to candidate sources.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    async fn resolve_suggestions(
        &self,
        items: Vec<String>,
    ) -> Result<SuggestionsResolveResponse, ApiError>;

    /// Classify every source's stance toward every claim.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    async fn analyze_claims(
        &self,
        request: ClaimAnalyzeRequest,
    ) -> Result<ClaimAnalyzeResponse, ApiError>;
}
