//! Printable views of API responses.

use serde::Serialize;

use crate::claims::{AnalyzeMeta, ClaimAnalyzeResponse, EvidenceHit};
use crate::sources::EnrichStats;

/// One evidence hit annotated with its display color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitOutput {
    /// Referenced source id.
    pub source_id: String,
    /// APA citation.
    pub apa: String,
    /// Relevance score.
    pub relevance: f64,
    /// Stance as sent by the backend.
    pub stance: String,
    /// Display color token for the stance.
    pub color: &'static str,
    /// True for external evidence.
    pub external: bool,
    /// Extracted sentences.
    pub evidence_sentences: Vec<String>,
}

impl From<&EvidenceHit> for HitOutput {
    fn from(hit: &EvidenceHit) -> Self {
        Self {
            source_id: hit.source_id.clone(),
            apa: hit.apa.clone(),
            relevance: hit.relevance,
            stance: hit.stance.to_string(),
            color: hit.stance_color(),
            external: hit.is_external(),
            evidence_sentences: hit.evidence_sentences.clone(),
        }
    }
}

/// Evidence for one claim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimOutput {
    /// Claim text.
    pub claim: String,
    /// Supporting hits, best first.
    pub supporting: Vec<HitOutput>,
    /// Counter hits, best first.
    pub counter: Vec<HitOutput>,
}

/// Full `analyze` command output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Thesis echoed by the backend.
    pub thesis: String,
    /// Enrichment counters.
    pub enrichment: EnrichStats,
    /// Per-claim evidence, in claim order.
    pub claims: Vec<ClaimOutput>,
    /// Run metadata.
    pub meta: AnalyzeMeta,
}

impl AnalysisReport {
    /// Build a report from enrichment stats and an analysis response.
    #[must_use]
    pub fn new(enrichment: EnrichStats, response: &ClaimAnalyzeResponse) -> Self {
        let claims = response
            .results
            .iter()
            .map(|result| ClaimOutput {
                claim: result.claim.clone(),
                supporting: result.top_supporting.iter().map(HitOutput::from).collect(),
                counter: result.top_counter.iter().map(HitOutput::from).collect(),
            })
            .collect();

        Self {
            thesis: response.thesis.clone(),
            enrichment,
            claims,
            meta: response.meta.clone(),
        }
    }
}
