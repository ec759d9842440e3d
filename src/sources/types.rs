//! Source data model.
//!
//! Two shapes of the same enriched source exist:
//! - [`BackendEnrichedSource`]: the snake_case wire record
//! - [`EnrichedSource`]: the canonical in-process record, serialized with
//!   camelCase names for display consumers
//!
//! Conversion between them lives in [`super::mapping`] only.

#![allow(clippy::struct_excessive_bools)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A minimal reference awaiting enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSource {
    /// Identifier, unique within a session.
    pub id: String,
    /// Raw reference text as supplied.
    pub raw: String,
    /// Best-effort title guess.
    #[serde(default)]
    pub title_guess: String,
    /// DOI, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// URL, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ParsedSource {
    /// Create a parsed source with explicit fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        raw: impl Into<String>,
        title_guess: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            raw: raw.into(),
            title_guess: title_guess.into(),
            doi: None,
            url: None,
        }
    }

    /// Create a parsed source from raw reference text with a fresh id.
    ///
    /// The title guess is the trimmed reference text.
    #[must_use]
    pub fn from_reference(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let title_guess = raw.trim().to_string();
        Self::new(Uuid::new_v4().to_string(), raw, title_guess)
    }

    /// Set the DOI.
    #[must_use]
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Set the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Enriched source as sent and received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendEnrichedSource {
    /// Identifier.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub id: String,
    /// OpenAlex work id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openalex_id: Option<String>,
    /// DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Title.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    /// Ordered author names.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub authors: Vec<String>,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Venue name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Citation count.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub cited_by_count: u64,
    /// Abstract; `null` when the upstream record has none.
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Low-confidence metadata flag.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub needs_review: bool,
    /// Formatted APA citation.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub apa: String,
    /// Whether the citation lacks fields.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub apa_incomplete: bool,
    /// Names of fields missing from the citation.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub apa_missing: Vec<String>,
}

/// Aggregate statistics for one enrichment batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichStats {
    /// Number of references submitted.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub input_count: usize,
    /// Number of references returned enriched.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub enriched_count: usize,
    /// Enriched references carrying an abstract.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub with_abstract: usize,
    /// Enriched references flagged for review.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub needs_review_count: usize,
}

impl EnrichStats {
    /// Inputs the backend did not return.
    #[must_use]
    pub const fn dropped_count(&self) -> usize {
        self.input_count.saturating_sub(self.enriched_count)
    }
}

/// Body returned by the enrichment endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichResult {
    /// Enriched records, in backend order.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub enriched: Vec<BackendEnrichedSource>,
    /// Batch statistics.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub stats: EnrichStats,
}

/// Canonical evidence unit used throughout the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSource {
    /// Identifier, unique within a session.
    pub id: String,
    /// OpenAlex work id.
    pub openalex_id: Option<String>,
    /// DOI.
    pub doi: Option<String>,
    /// URL.
    pub url: Option<String>,
    /// Title.
    pub title: String,
    /// Ordered author names.
    pub authors: Vec<String>,
    /// Publication year.
    pub year: Option<i32>,
    /// Venue name.
    pub venue: Option<String>,
    /// Citation count.
    pub cited_by: u64,
    /// Abstract; `None` is distinct from an empty abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Formatted APA citation.
    pub apa_citation: String,
    /// Whether the citation lacks fields, as asserted by the backend.
    pub apa_incomplete: bool,
    /// Fields missing from the citation, as asserted by the backend.
    pub apa_missing: Vec<String>,
    /// Low-confidence metadata flag.
    pub needs_review: bool,
    /// Canonical reference URL chosen at mapping time.
    pub doi_url: Option<String>,
}
