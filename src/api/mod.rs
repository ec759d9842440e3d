//! Evidence backend transport.
//!
//! This module provides:
//! - [`EvidenceClient`]: JSON-over-HTTP round trips to the backend
//! - [`ClientConfig`]: API root and optional timeout
//!
//! # Architecture
//!
//! The client uses `reqwest` and implements [`EvidenceApi`](crate::traits::EvidenceApi):
//! - `POST sources/enrich`
//! - `POST search/openalex`
//! - `POST suggestions/resolve`
//! - `POST claims/analyze`
//! - `GET health` (via [`EvidenceClient::ping`])
//!
//! # Example
//!
//! ```
//! use evidence_research::api::{ClientConfig, EvidenceClient};
//!
//! let config = ClientConfig::new().with_api_root("https://evidence.test/api/");
//! let client = EvidenceClient::new(config).unwrap();
//! assert_eq!(client.url_for("/claims/analyze"), "https://evidence.test/api/claims/analyze");
//! ```

mod client;
mod config;

pub use client::{
    build_url, EvidenceClient, ANALYZE_PATH, ENRICH_PATH, HEALTH_PATH, RESOLVE_PATH, SEARCH_PATH,
};
pub use config::ClientConfig;
