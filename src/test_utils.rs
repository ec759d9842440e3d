//! Test utilities and mock factories.
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::claims::{AnalyzeMeta, ClaimAnalyzeRequest, ClaimAnalyzeResponse, ClaimResult, EvidenceHit};
use crate::discovery::{SearchResult, VenueBadge};
use crate::error::ApiError;
use crate::sources::{map_enriched_source, BackendEnrichedSource, EnrichedSource, ParsedSource};
use crate::stance::Stance;
use crate::traits::MockEvidenceApi;

/// Create a mock API whose every operation fails with `error`.
#[must_use]
pub fn mock_api_error(error: ApiError) -> MockEvidenceApi {
    let mut mock = MockEvidenceApi::new();
    let e = error.clone();
    mock.expect_enrich_sources().returning(move |_| Err(e.clone()));
    let e = error.clone();
    mock.expect_search_openalex().returning(move |_| Err(e.clone()));
    let e = error.clone();
    mock.expect_resolve_suggestions()
        .returning(move |_| Err(e.clone()));
    mock.expect_analyze_claims()
        .returning(move |_| Err(error.clone()));
    mock
}

/// A parsed reference with the given id.
#[must_use]
pub fn parsed_source(id: &str) -> ParsedSource {
    ParsedSource::new(id, format!("Reference {id}"), format!("Title {id}"))
        .with_doi(format!("10.1000/{id}"))
}

/// A wire record with a DOI but no URL.
#[must_use]
pub fn backend_source(id: &str) -> BackendEnrichedSource {
    BackendEnrichedSource {
        id: id.to_string(),
        openalex_id: Some(format!("W-{id}")),
        doi: Some(format!("10.1000/{id}")),
        url: None,
        title: format!("Title {id}"),
        authors: vec!["Doe, J.".to_string()],
        year: Some(2021),
        venue: Some("Journal of Tests".to_string()),
        cited_by_count: 7,
        abstract_text: Some(format!("Abstract {id}")),
        needs_review: false,
        apa: format!("Doe, J. (2021). Title {id}. Journal of Tests."),
        apa_incomplete: false,
        apa_missing: vec![],
    }
}

/// A canonical source mapped from [`backend_source`].
#[must_use]
pub fn enriched_source(id: &str) -> EnrichedSource {
    map_enriched_source(backend_source(id))
}

/// A search candidate with the given OpenAlex id.
#[must_use]
pub fn search_result(openalex_id: &str) -> SearchResult {
    SearchResult {
        openalex_id: openalex_id.to_string(),
        title: format!("Result {}", openalex_id.trim()),
        year: Some(2019),
        venue: Some("Preprint Server".to_string()),
        venue_badge: VenueBadge::Preprint,
        doi: Some("10.2000/result".to_string()),
        url: Some("https://results.test/1".to_string()),
        authors: vec!["Roe, R.".to_string()],
        cited_by_count: 3,
        abstract_text: None,
        needs_review: true,
    }
}

/// An evidence hit for `source_id`.
#[must_use]
pub fn evidence_hit(source_id: &str, relevance: f64, stance: Stance) -> EvidenceHit {
    EvidenceHit {
        source_id: source_id.to_string(),
        apa: format!("Citation {source_id}"),
        relevance,
        stance,
        evidence_sentences: vec![format!("Sentence from {source_id}.")],
        source_kind: None,
    }
}

/// A response with one empty result per requested claim.
#[must_use]
pub fn echo_analysis(request: &ClaimAnalyzeRequest) -> ClaimAnalyzeResponse {
    ClaimAnalyzeResponse {
        thesis: request.thesis.clone(),
        results: request
            .claims
            .iter()
            .map(|claim| ClaimResult {
                claim: claim.clone(),
                top_supporting: vec![],
                top_counter: vec![],
            })
            .collect(),
        meta: AnalyzeMeta {
            model: "test-model".to_string(),
            per_claim_calls: u32::try_from(request.claims.len()).unwrap(),
            sources_considered: u32::try_from(request.pool_size()).unwrap(),
        },
    }
}
