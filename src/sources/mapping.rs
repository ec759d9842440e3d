//! Translation between wire records and the canonical source model.
//!
//! This is the only place backend field names meet in-process names.

use super::types::{BackendEnrichedSource, EnrichedSource};

/// Prefix for DOI-derived links.
pub const DOI_RESOLVER: &str = "https://doi.org/";

/// Map a backend record to the canonical model.
///
/// Every field passes through unchanged except that `doi_url` is computed
/// by [`canonical_reference_url`].
#[must_use]
pub fn map_enriched_source(record: BackendEnrichedSource) -> EnrichedSource {
    let doi_url = canonical_reference_url(record.url.as_deref(), record.doi.as_deref());

    EnrichedSource {
        id: record.id,
        openalex_id: record.openalex_id,
        doi: record.doi,
        url: record.url,
        title: record.title,
        authors: record.authors,
        year: record.year,
        venue: record.venue,
        cited_by: record.cited_by_count,
        abstract_text: record.abstract_text,
        apa_citation: record.apa,
        apa_incomplete: record.apa_incomplete,
        apa_missing: record.apa_missing,
        needs_review: record.needs_review,
        doi_url,
    }
}

/// Pick the single resolvable link for a source.
///
/// A non-blank URL is used verbatim; otherwise a non-blank DOI becomes a
/// `https://doi.org/` link; otherwise there is none.
#[must_use]
pub fn canonical_reference_url(url: Option<&str>, doi: Option<&str>) -> Option<String> {
    if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
        return Some(url.to_string());
    }
    doi.filter(|d| !d.trim().is_empty())
        .map(|d| format!("{DOI_RESOLVER}{d}"))
}

impl From<BackendEnrichedSource> for EnrichedSource {
    fn from(record: BackendEnrichedSource) -> Self {
        map_enriched_source(record)
    }
}

/// Back to the wire shape for analysis requests. `doi_url` is derived and
/// not sent.
impl From<&EnrichedSource> for BackendEnrichedSource {
    fn from(source: &EnrichedSource) -> Self {
        Self {
            id: source.id.clone(),
            openalex_id: source.openalex_id.clone(),
            doi: source.doi.clone(),
            url: source.url.clone(),
            title: source.title.clone(),
            authors: source.authors.clone(),
            year: source.year,
            venue: source.venue.clone(),
            cited_by_count: source.cited_by,
            abstract_text: source.abstract_text.clone(),
            needs_review: source.needs_review,
            apa: source.apa_citation.clone(),
            apa_incomplete: source.apa_incomplete,
            apa_missing: source.apa_missing.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    fn backend_record() -> BackendEnrichedSource {
        serde_json::from_value(json!({
            "id": "src-1",
            "openalex_id": "W123",
            "doi": "10.1/y",
            "url": "https://x.test/a",
            "title": "Sleep and memory",
            "authors": ["Walker, M.", "Stickgold, R."],
            "year": 2004,
            "venue": "Neuron",
            "cited_by_count": 812,
            "abstract": "We review...",
            "needs_review": false,
            "apa": "Walker, M., & Stickgold, R. (2004). Sleep and memory. Neuron.",
            "apa_incomplete": true,
            "apa_missing": ["volume", "pages"]
        }))
        .unwrap()
    }

    #[test_case(Some("https://x.test/a"), Some("10.1/y"), Some("https://x.test/a") ; "url wins over doi")]
    #[test_case(Some(""), Some("10.1/y"), Some("https://doi.org/10.1/y") ; "blank url falls back to doi")]
    #[test_case(Some("   "), Some("10.1/y"), Some("https://doi.org/10.1/y") ; "whitespace url falls back to doi")]
    #[test_case(None, Some("10.1/y"), Some("https://doi.org/10.1/y") ; "missing url")]
    #[test_case(None, Some("  "), None ; "blank doi")]
    #[test_case(Some(""), None, None ; "nothing usable")]
    #[test_case(None, None, None ; "neither present")]
    fn test_canonical_reference_url(url: Option<&str>, doi: Option<&str>, expected: Option<&str>) {
        assert_eq!(
            canonical_reference_url(url, doi),
            expected.map(ToString::to_string)
        );
    }

    #[test]
    fn test_url_is_used_verbatim() {
        assert_eq!(
            canonical_reference_url(Some(" https://x.test/a "), None),
            Some(" https://x.test/a ".to_string())
        );
    }

    #[test]
    fn test_map_renames_every_field() {
        let mapped = map_enriched_source(backend_record());

        assert_eq!(
            mapped,
            EnrichedSource {
                id: "src-1".into(),
                openalex_id: Some("W123".into()),
                doi: Some("10.1/y".into()),
                url: Some("https://x.test/a".into()),
                title: "Sleep and memory".into(),
                authors: vec!["Walker, M.".into(), "Stickgold, R.".into()],
                year: Some(2004),
                venue: Some("Neuron".into()),
                cited_by: 812,
                abstract_text: Some("We review...".into()),
                apa_citation: "Walker, M., & Stickgold, R. (2004). Sleep and memory. Neuron."
                    .into(),
                apa_incomplete: true,
                apa_missing: vec!["volume".into(), "pages".into()],
                needs_review: false,
                doi_url: Some("https://x.test/a".into()),
            }
        );
    }

    #[test]
    fn test_citation_flags_pass_through_unchanged() {
        let mut record = backend_record();
        record.apa_incomplete = false;
        record.apa_missing = vec!["year".into()];

        let mapped = map_enriched_source(record);
        assert!(!mapped.apa_incomplete);
        assert_eq!(mapped.apa_missing, vec!["year".to_string()]);
    }

    #[test]
    fn test_null_abstract_stays_distinct_from_empty() {
        let mut record = backend_record();
        record.abstract_text = None;
        assert_eq!(map_enriched_source(record).abstract_text, None);

        let mut record = backend_record();
        record.abstract_text = Some(String::new());
        assert_eq!(map_enriched_source(record).abstract_text, Some(String::new()));
    }

    #[test]
    fn test_sparse_record_maps_without_failure() {
        let record: BackendEnrichedSource = serde_json::from_value(json!({"id": "bare"})).unwrap();
        let mapped = map_enriched_source(record);
        assert_eq!(mapped.id, "bare");
        assert!(mapped.authors.is_empty());
        assert_eq!(mapped.cited_by, 0);
        assert_eq!(mapped.doi_url, None);
    }

    #[test]
    fn test_ui_serialization_uses_camel_case() {
        let value = serde_json::to_value(map_enriched_source(backend_record())).unwrap();
        assert_eq!(value["citedBy"], 812);
        assert!(!value["apaCitation"].as_str().unwrap().is_empty());
        assert_eq!(value["apaIncomplete"], true);
        assert_eq!(value["doiUrl"], "https://x.test/a");
        assert_eq!(value["openalexId"], "W123");
        assert_eq!(value["abstract"], "We review...");
        assert!(value.get("cited_by_count").is_none());
    }

    #[test]
    fn test_back_to_wire_drops_only_derived_link() {
        let record = backend_record();
        let mapped = map_enriched_source(record.clone());
        let wire = BackendEnrichedSource::from(&mapped);
        assert_eq!(wire, record);

        let value = serde_json::to_value(&wire).unwrap();
        assert!(value.get("doi_url").is_none());
        assert_eq!(value["cited_by_count"], 812);
    }
}
