//! Evidence backend HTTP client.
//!
//! This module provides:
//! - A generic JSON round trip ([`EvidenceClient::request`])
//! - URL building against the configured API root
//! - Conversion of non-success responses into [`ApiError`]
//!
//! Each call is exactly one round trip. There are no retries, no caching and
//! no client-side validation of request bodies.

#![allow(clippy::missing_errors_doc)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::ClientConfig;
use crate::claims::{ClaimAnalyzeRequest, ClaimAnalyzeResponse};
use crate::discovery::{ResolveRequest, SearchQuery, SearchResponse, SuggestionsResolveResponse};
use crate::error::ApiError;
use crate::sources::{EnrichResult, ParsedSource};
use crate::traits::EvidenceApi;

/// Enrichment endpoint path.
pub const ENRICH_PATH: &str = "sources/enrich";
/// Search endpoint path.
pub const SEARCH_PATH: &str = "search/openalex";
/// Suggestion resolver endpoint path.
pub const RESOLVE_PATH: &str = "suggestions/resolve";
/// Claim analysis endpoint path.
pub const ANALYZE_PATH: &str = "claims/analyze";
/// Liveness probe path.
pub const HEALTH_PATH: &str = "health";

/// Body of an enrichment request.
#[derive(Debug, Serialize)]
struct EnrichRequest {
    sources: Vec<ParsedSource>,
}

/// Evidence backend client.
#[derive(Debug, Clone)]
pub struct EvidenceClient {
    client: Client,
    config: ClientConfig,
}

impl EvidenceClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::request(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the API root.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.config.api_root
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an endpoint path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        build_url(&self.config.api_root, path)
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub async fn request<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let url = self.url_for(path);
        let payload = serde_json::to_vec(body)
            .map_err(|e| ApiError::request(format!("Failed to serialize request: {e}")))?;
        let start = Instant::now();

        tracing::debug!(url = %url, bytes = payload.len(), "Starting evidence API request");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| self.network_failure(&url, start, &e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| self.network_failure(&url, start, &e))?;

        tracing::debug!(
            url = %url,
            status,
            elapsed_ms = elapsed_ms(start),
            "Evidence API response received"
        );

        if !(200..300).contains(&status) {
            let error = ApiError::from_response(status, text);
            tracing::warn!(url = %url, status, message = %error.message, "Evidence API request failed");
            return Err(error);
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(url = %url, status, error = %e, "Evidence API response did not decode");
            ApiError::decode(status, &e, text)
        })
    }

    /// Liveness probe. Succeeds on any 2xx.
    pub async fn ping(&self) -> Result<(), ApiError> {
        let url = self.url_for(HEALTH_PATH);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.network_failure(&url, start, &e))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            tracing::debug!(url = %url, status, elapsed_ms = elapsed_ms(start), "Backend healthy");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, text))
    }

    fn network_failure(&self, url: &str, start: Instant, error: &reqwest::Error) -> ApiError {
        let elapsed_ms = elapsed_ms(start);
        if error.is_timeout() {
            tracing::error!(
                url = %url,
                elapsed_ms,
                timeout_ms = ?self.config.timeout_ms,
                "Evidence API request timed out"
            );
            ApiError::network(format!("Request timed out after {elapsed_ms}ms"))
        } else {
            tracing::error!(url = %url, elapsed_ms, error = %error, "Evidence API request failed");
            ApiError::network(format!("Network error: {error}"))
        }
    }
}

/// Join an endpoint path onto the API root with exactly one `/`.
///
/// One leading `/` is removed from `path`.
#[must_use]
pub fn build_url(api_root: &str, path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{api_root}/{path}")
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

// ============================================================================
// EvidenceApi implementations
// ============================================================================

#[async_trait]
impl EvidenceApi for EvidenceClient {
    async fn enrich_sources(&self, sources: Vec<ParsedSource>) -> Result<EnrichResult, ApiError> {
        self.request(ENRICH_PATH, &EnrichRequest { sources }).await
    }

    async fn search_openalex(&self, query: SearchQuery) -> Result<SearchResponse, ApiError> {
        self.request(SEARCH_PATH, &query).await
    }

    async fn resolve_suggestions(
        &self,
        items: Vec<String>,
    ) -> Result<SuggestionsResolveResponse, ApiError> {
        self.request(RESOLVE_PATH, &ResolveRequest { items }).await
    }

    async fn analyze_claims(
        &self,
        request: ClaimAnalyzeRequest,
    ) -> Result<ClaimAnalyzeResponse, ApiError> {
        self.request(ANALYZE_PATH, &request).await
    }
}

/// Shared client, so several services can use one connection pool.
#[async_trait]
impl EvidenceApi for Arc<EvidenceClient> {
    async fn enrich_sources(&self, sources: Vec<ParsedSource>) -> Result<EnrichResult, ApiError> {
        self.as_ref().enrich_sources(sources).await
    }

    async fn search_openalex(&self, query: SearchQuery) -> Result<SearchResponse, ApiError> {
        self.as_ref().search_openalex(query).await
    }

    async fn resolve_suggestions(
        &self,
        items: Vec<String>,
    ) -> Result<SuggestionsResolveResponse, ApiError> {
        self.as_ref().resolve_suggestions(items).await
    }

    async fn analyze_claims(
        &self,
        request: ClaimAnalyzeRequest,
    ) -> Result<ClaimAnalyzeResponse, ApiError> {
        self.as_ref().analyze_claims(request).await
    }
}
