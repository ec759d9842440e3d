//! Help text for CLI commands.

/// Get help text for CLI commands.
#[must_use]
pub const fn help_text() -> &'static str {
    r#"Evidence Research Commands:

  health              Check that the evidence backend is reachable

  search QUERY... [options]
                      Search OpenAlex for candidate sources
    --limit, -l N         Maximum results to return
    --exclude-preprints   Drop preprint venues
    --from-year YEAR      Earliest publication year
    --to-year YEAR        Latest publication year

  resolve LINE...     Resolve free-text reference lines into candidates

  analyze FILE        Enrich the sources in FILE, then analyze its claims
                      FILE is JSON: {"thesis", "claims", "sources",
                      "proquest_evidence"?}

  help                Show this help

Environment:
  EVIDENCE_API_BASE_URL  API base (default: /api)
  EVIDENCE_API_ORIGIN    Origin for a relative base (default: http://localhost:7071)
  REQUEST_TIMEOUT_MS     Request timeout, 1000-300000 (default: none)
  LOG_LEVEL              Log filter (default: info)
  LOG_FORMAT             text or json (default: text)

Examples:
  evidence-research health
  evidence-research search sleep deprivation memory --limit 5 --from-year 2015
  evidence-research resolve "Walker, M. (2017). Why we sleep."
  evidence-research analyze essay.json
"#
}
