//! Discovery request and response types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::sources::ParsedSource;

/// A filtered keyword search. Unset filters are omitted from the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text query.
    pub query: String,
    /// Maximum results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Exclude preprint venues.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_preprints: Option<bool>,
    /// Earliest publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_year: Option<i32>,
    /// Latest publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_year: Option<i32>,
}

impl SearchQuery {
    /// Create a query with no filters.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
            exclude_preprints: None,
            from_year: None,
            to_year: None,
        }
    }

    /// Set the result limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set whether preprints are excluded.
    #[must_use]
    pub const fn excluding_preprints(mut self, exclude: bool) -> Self {
        self.exclude_preprints = Some(exclude);
        self
    }

    /// Set the earliest year.
    #[must_use]
    pub const fn from_year(mut self, year: i32) -> Self {
        self.from_year = Some(year);
        self
    }

    /// Set the latest year.
    #[must_use]
    pub const fn to_year(mut self, year: i32) -> Self {
        self.to_year = Some(year);
        self
    }
}

/// Venue classification of a search result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VenueBadge {
    /// Peer-reviewed journal or conference.
    #[serde(rename = "Journal/Conference")]
    JournalConference,
    /// Preprint server.
    #[serde(rename = "Preprint")]
    Preprint,
    /// Anything else.
    #[default]
    #[serde(rename = "Unknown", other)]
    Unknown,
}

/// A source candidate prior to enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// OpenAlex work id.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub openalex_id: String,
    /// Title.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub title: String,
    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Venue name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Venue classification.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub venue_badge: VenueBadge,
    /// DOI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Ordered author names.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub authors: Vec<String>,
    /// Citation count.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub cited_by_count: u64,
    /// Abstract, `null` when absent.
    #[serde(default, rename = "abstract")]
    pub abstract_text: Option<String>,
    /// Low-confidence metadata flag.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub needs_review: bool,
}

impl SearchResult {
    /// Promote this candidate to a reference ready for enrichment.
    ///
    /// The OpenAlex id becomes the reference id; a blank id is replaced by a
    /// fresh one.
    #[must_use]
    pub fn to_parsed_source(&self) -> ParsedSource {
        let id = if self.openalex_id.trim().is_empty() {
            Uuid::new_v4().to_string()
        } else {
            self.openalex_id.clone()
        };
        ParsedSource {
            id,
            raw: self.title.clone(),
            title_guess: self.title.clone(),
            doi: self.doi.clone(),
            url: self.url.clone(),
        }
    }
}

/// Echoed query statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStats {
    /// Query as the backend received it.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub query: String,
    /// Number of primary results returned.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub returned: usize,
}

/// Body returned by the search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    /// Primary results. Empty means no matches.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub results: Vec<SearchResult>,
    /// Alternate or related candidates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested: Option<Vec<SearchResult>>,
    /// Backend-defined extra data, never interpreted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    /// Result statistics.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub stats: SearchStats,
}

/// Body sent to the suggestion resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    /// Citation fragments, in caller order.
    pub items: Vec<String>,
}

/// Body returned by the suggestion resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsResolveResponse {
    /// Resolved candidates.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub suggested: Vec<SearchResult>,
    /// Fragments that could not be resolved, verbatim.
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub unresolved_lines: Vec<String>,
}

impl SuggestionsResolveResponse {
    /// True when at least one fragment could not be resolved.
    #[must_use]
    pub fn has_unresolved(&self) -> bool {
        !self.unresolved_lines.is_empty()
    }
}
