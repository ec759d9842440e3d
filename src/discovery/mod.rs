//! Source discovery.
//!
//! This module provides two independent operations:
//! - `search_openalex`: a single filtered keyword search
//! - `resolve_suggestions`: turn citation fragments into candidate sources
//!
//! Both treat "nothing found" as a successful outcome: an empty result list
//! or a list of unresolved lines, never an error.

mod types;

pub use types::{
    ResolveRequest, SearchQuery, SearchResponse, SearchResult, SearchStats,
    SuggestionsResolveResponse, VenueBadge,
};

use crate::error::ApiError;
use crate::traits::EvidenceApi;

/// Discovery service over an evidence backend.
pub struct DiscoveryService<C>
where
    C: EvidenceApi,
{
    client: C,
}

impl<C> DiscoveryService<C>
where
    C: EvidenceApi,
{
    /// Create a new discovery service.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }

    /// Run a filtered keyword search.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn search_openalex(&self, query: SearchQuery) -> Result<SearchResponse, ApiError> {
        let response = self.client.search_openalex(query).await?;
        tracing::debug!(
            query = %response.stats.query,
            returned = response.results.len(),
            suggested = response.suggested.as_ref().map_or(0, Vec::len),
            "Search complete"
        );
        Ok(response)
    }

    /// Resolve citation fragments to candidate sources.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the round trip fails.
    pub async fn resolve_suggestions(
        &self,
        items: Vec<String>,
    ) -> Result<SuggestionsResolveResponse, ApiError> {
        let requested = items.len();
        let response = self.client.resolve_suggestions(items).await?;
        if response.has_unresolved() {
            tracing::info!(
                requested,
                resolved = response.suggested.len(),
                unresolved = response.unresolved_lines.len(),
                "Some citation fragments could not be resolved"
            );
        }
        Ok(response)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_api_error, search_result};
    use crate::traits::MockEvidenceApi;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_query_omits_unset_filters() {
        let value = serde_json::to_value(SearchQuery::new("sleep memory")).unwrap();
        assert_eq!(value, json!({"query": "sleep memory"}));
    }

    #[test]
    fn test_query_includes_set_filters() {
        let query = SearchQuery::new("sleep")
            .with_limit(5)
            .excluding_preprints(true)
            .from_year(2010)
            .to_year(2020);
        let value = serde_json::to_value(query).unwrap();
        assert_eq!(
            value,
            json!({
                "query": "sleep",
                "limit": 5,
                "exclude_preprints": true,
                "from_year": 2010,
                "to_year": 2020
            })
        );
    }

    #[test]
    fn test_explicit_false_filter_is_sent() {
        let value = serde_json::to_value(SearchQuery::new("q").excluding_preprints(false)).unwrap();
        assert_eq!(value["exclude_preprints"], false);
    }

    #[test]
    fn test_venue_badge_labels() {
        let badges: Vec<VenueBadge> =
            serde_json::from_value(json!(["Journal/Conference", "Preprint", "Unknown", "Blog"]))
                .unwrap();
        assert_eq!(
            badges,
            vec![
                VenueBadge::JournalConference,
                VenueBadge::Preprint,
                VenueBadge::Unknown,
                VenueBadge::Unknown,
            ]
        );
        assert_eq!(
            serde_json::to_value(VenueBadge::JournalConference).unwrap(),
            json!("Journal/Conference")
        );
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [{"title": "Only a title"}],
            "meta": {"anything": [1, 2, 3]}
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].venue_badge, VenueBadge::Unknown);
        assert!(response.suggested.is_none());
        assert_eq!(response.stats, SearchStats::default());
        assert!(response.meta.is_some());
    }

    #[test]
    fn test_promote_search_result() {
        let result = search_result("W42");
        let parsed = result.to_parsed_source();
        assert_eq!(parsed.id, "W42");
        assert_eq!(parsed.title_guess, result.title);
        assert_eq!(parsed.doi, result.doi);
        assert_eq!(parsed.url, result.url);
    }

    #[test]
    fn test_promote_blank_id_gets_fresh_id() {
        let parsed = search_result("  ").to_parsed_source();
        assert!(!parsed.id.trim().is_empty());
    }

    #[tokio::test]
    async fn test_search_passes_query_through() {
        let mut mock = MockEvidenceApi::new();
        mock.expect_search_openalex()
            .withf(|q| q.query == "sleep" && q.limit == Some(3) && q.from_year.is_none())
            .times(1)
            .returning(|q| {
                Ok(SearchResponse {
                    results: vec![search_result("W1"), search_result("W2")],
                    suggested: Some(vec![search_result("W9")]),
                    meta: None,
                    stats: SearchStats {
                        query: q.query,
                        returned: 2,
                    },
                })
            });

        let service = DiscoveryService::new(mock);
        let response = service
            .search_openalex(SearchQuery::new("sleep").with_limit(3))
            .await
            .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].openalex_id, "W1");
        assert_eq!(response.stats.query, "sleep");
    }

    #[tokio::test]
    async fn test_search_with_no_matches_is_ok() {
        let mut mock = MockEvidenceApi::new();
        mock.expect_search_openalex()
            .returning(|_| Ok(SearchResponse::default()));

        let service = DiscoveryService::new(mock);
        let response = service.search_openalex(SearchQuery::new("zzz")).await.unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_fragment_is_returned_verbatim() {
        let mut mock = MockEvidenceApi::new();
        mock.expect_resolve_suggestions()
            .withf(|items| items == &vec!["bad fragment".to_string()])
            .returning(|items| {
                Ok(SuggestionsResolveResponse {
                    suggested: vec![],
                    unresolved_lines: items,
                })
            });

        let service = DiscoveryService::new(mock);
        let response = service
            .resolve_suggestions(vec!["bad fragment".to_string()])
            .await
            .unwrap();

        assert_eq!(
            response,
            SuggestionsResolveResponse {
                suggested: vec![],
                unresolved_lines: vec!["bad fragment".to_string()],
            }
        );
        assert!(response.has_unresolved());
    }

    #[tokio::test]
    async fn test_discovery_propagates_errors() {
        let service = DiscoveryService::new(mock_api_error(ApiError::network("offline")));
        let err = service.search_openalex(SearchQuery::new("q")).await.unwrap_err();
        assert!(err.is_network());
        let err = service.resolve_suggestions(vec![]).await.unwrap_err();
        assert_eq!(err.message, "offline");
    }

    #[test]
    fn test_search_response_tolerates_null_fields() {
        let response: SearchResponse = serde_json::from_value(json!({
            "results": [
                {"openalex_id": "W1", "title": null, "venue_badge": null, "authors": null,
                 "cited_by_count": null, "abstract": null, "needs_review": null},
                {"openalex_id": "W2", "title": "Kept", "venue_badge": "Preprint"}
            ],
            "suggested": null,
            "meta": null,
            "stats": {"query": null, "returned": 2}
        }))
        .unwrap();

        assert_eq!(response.results.len(), 2);
        let first = &response.results[0];
        assert_eq!(first.title, "");
        assert_eq!(first.venue_badge, VenueBadge::Unknown);
        assert!(first.authors.is_empty());
        assert_eq!(first.cited_by_count, 0);
        assert!(!first.needs_review);
        assert_eq!(response.results[1].venue_badge, VenueBadge::Preprint);
        assert!(response.suggested.is_none());
        assert!(response.meta.is_none());
        assert_eq!(response.stats.returned, 2);
    }

    #[test]
    fn test_resolve_response_tolerates_null_lists() {
        let response: SuggestionsResolveResponse =
            serde_json::from_value(json!({"suggested": null, "unresolved_lines": ["bad fragment"]}))
                .unwrap();
        assert!(response.suggested.is_empty());
        assert!(response.has_unresolved());
    }
}
