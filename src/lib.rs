//! Evidence Research Client
//!
//! A typed client for an evidence-research backend: enrich bibliographic
//! references, discover candidate sources on OpenAlex, and rank sources as
//! supporting or countering the claims of a thesis.
//!
//! # Features
//!
//! - One JSON-over-HTTP round trip per operation, no hidden retries
//! - Snake_case wire records mapped into one canonical source shape
//! - Stance labels normalized into display colors
//! - Stale-response detection for overlapping claim analyses
//!
//! # Quick Start
//!
//! ```bash
//! EVIDENCE_API_ORIGIN=http://localhost:7071 ./evidence-research analyze essay.json
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────────┐   POST JSON   ┌─────────────────┐
//! │  CLI / caller│──▶│ SourceEnricher  │──────────────▶│                 │
//! │              │   │ DiscoveryService│   EvidenceApi │ Evidence backend│
//! │              │◀──│ ClaimsAnalyzer  │◀──────────────│  (/api/...)     │
//! └──────────────┘   └─────────────────┘               └─────────────────┘
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod claims;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod sources;
pub mod stance;
pub mod traits;
mod wire;

#[cfg(test)]
mod test_utils;
