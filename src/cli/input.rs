//! Input file for the `analyze` command.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::claims::ExternalEvidenceItem;
use crate::error::AppError;
use crate::sources::ParsedSource;

/// Thesis, claims and raw references to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeInput {
    /// Thesis statement.
    pub thesis: String,
    /// Claims, in the order results should come back.
    pub claims: Vec<String>,
    /// References to enrich before analysis.
    #[serde(default)]
    pub sources: Vec<ParsedSource>,
    /// Optional external evidence.
    #[serde(default)]
    pub proquest_evidence: Option<Vec<ExternalEvidenceItem>>,
}

impl AnalyzeInput {
    /// Parse input from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Input`] if the text is not a valid input document.
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|e| AppError::Input {
            message: format!("Invalid analyze input: {e}"),
        })
    }

    /// Read and parse an input file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Input`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| AppError::Input {
            message: format!("Cannot read {}: {e}", path.display()),
        })?;
        Self::from_json(&text)
    }
}
