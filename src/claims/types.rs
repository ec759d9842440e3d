//! Claim analysis request and response types.
//!
//! Evidence lists in a [`ClaimResult`] are ranked by the backend. Array
//! order is the canonical rank; nothing in this crate re-sorts or filters
//! them.

use serde::{Deserialize, Serialize};

use crate::sources::{BackendEnrichedSource, EnrichedSource};
use crate::stance::Stance;

/// `source_kind` tag of externally supplied evidence.
pub const PROQUEST_SOURCE_KIND: &str = "proquest";

/// Externally sourced evidence that skips enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEvidenceItem {
    /// Identifier, referenced by `EvidenceHit::source_id`.
    pub id: String,
    /// Title, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Abstract or full-text excerpt.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Link to the evidence, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ExternalEvidenceItem {
    /// Create an item from an abstract.
    #[must_use]
    pub fn new(id: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            abstract_text: abstract_text.into(),
            url: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Body sent to the claim analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAnalyzeRequest {
    /// Thesis the claims belong to.
    pub thesis: String,
    /// Claims, in caller order.
    pub claims: Vec<String>,
    /// Evidence pool in wire form.
    pub sources: Vec<BackendEnrichedSource>,
    /// Externally supplied evidence merged into the pool by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proquest_evidence: Option<Vec<ExternalEvidenceItem>>,
}

impl ClaimAnalyzeRequest {
    /// Build a request from canonical sources.
    #[must_use]
    pub fn new(thesis: impl Into<String>, claims: Vec<String>, sources: &[EnrichedSource]) -> Self {
        Self {
            thesis: thesis.into(),
            claims,
            sources: sources.iter().map(BackendEnrichedSource::from).collect(),
            proquest_evidence: None,
        }
    }

    /// Attach external evidence. An empty list leaves the field unset.
    #[must_use]
    pub fn with_proquest_evidence(mut self, items: Vec<ExternalEvidenceItem>) -> Self {
        self.proquest_evidence = if items.is_empty() { None } else { Some(items) };
        self
    }

    /// Number of evidence items sent, enriched plus external.
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.sources.len() + self.proquest_evidence.as_ref().map_or(0, Vec::len)
    }
}

/// One scored claim-to-source linkage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceHit {
    /// Id of an enriched source or external item from the same request.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub source_id: String,
    /// APA citation.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub apa: String,
    /// Relevance score; higher is more relevant. Scale is backend-defined.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub relevance: f64,
    /// Stance of the source toward the claim.
    #[serde(default = "unrecognized_stance")]
    pub stance: Stance,
    /// Extracted sentences, in backend order.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub evidence_sentences: Vec<String>,
    /// Origin tag; `"proquest"` for external evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_kind: Option<String>,
}

fn unrecognized_stance() -> Stance {
    Stance::Unrecognized(String::new())
}

impl EvidenceHit {
    /// True when the hit refers to externally supplied evidence.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.source_kind
            .as_deref()
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case(PROQUEST_SOURCE_KIND))
    }

    /// Display color token for this hit's stance.
    #[must_use]
    pub const fn stance_color(&self) -> &'static str {
        self.stance.display_color()
    }
}

/// Ranked evidence for one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimResult {
    /// Claim text.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub claim: String,
    /// Supporting evidence, best first.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub top_supporting: Vec<EvidenceHit>,
    /// Counter evidence, best first.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub top_counter: Vec<EvidenceHit>,
}

impl ClaimResult {
    /// True when the backend found no evidence either way.
    #[must_use]
    pub fn has_no_evidence(&self) -> bool {
        self.top_supporting.is_empty() && self.top_counter.is_empty()
    }

    /// Hits whose stance does not belong in the list they were returned in.
    #[must_use]
    pub fn misplaced_hits(&self) -> usize {
        let supporting = self
            .top_supporting
            .iter()
            .filter(|h| !h.stance.fits_supporting())
            .count();
        let counter = self
            .top_counter
            .iter()
            .filter(|h| !h.stance.fits_counter())
            .count();
        supporting + counter
    }
}

/// Observability data about an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeMeta {
    /// Model identifier used by the backend.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub model: String,
    /// Number of per-claim backend calls made.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub per_claim_calls: u32,
    /// Number of sources considered.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub sources_considered: u32,
}

/// Body returned by the claim analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClaimAnalyzeResponse {
    /// Thesis echoed back.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub thesis: String,
    /// One result per claim, in request order.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub results: Vec<ClaimResult>,
    /// Run metadata.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub meta: AnalyzeMeta,
}

impl ClaimAnalyzeResponse {
    /// Index of the first result that does not line up with `claims`.
    ///
    /// Returns `None` when the counts match and every `results[i].claim`
    /// equals `claims[i]`.
    #[must_use]
    pub fn first_misaligned(&self, claims: &[String]) -> Option<usize> {
        let position = self
            .results
            .iter()
            .zip(claims)
            .position(|(result, claim)| result.claim != *claim);
        position.or_else(|| {
            (self.results.len() != claims.len()).then(|| self.results.len().min(claims.len()))
        })
    }
}
