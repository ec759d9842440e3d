//! Stance classification.
//!
//! A stance is a source's relationship to a claim. The backend sends it as a
//! free-form label; this module normalizes the label and maps it to a display
//! color token. Both operations are total: unrecognized labels degrade to a
//! safe default instead of failing.
//!
//! # Example
//!
//! ```
//! use evidence_research::stance::{classify_stance_display, normalize_stance_key, Stance};
//!
//! assert_eq!(normalize_stance_key(" Mixed "), "mixed");
//! assert_eq!(classify_stance_display("SUPPORTS"), "green-darken-1");
//! assert_eq!(classify_stance_display("bogus"), "gray");
//! assert_eq!(Stance::parse("Opposes"), Stance::Opposes);
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Color token for a supporting stance.
pub const SUPPORTS_COLOR: &str = "green-darken-1";
/// Color token for an opposing stance.
pub const OPPOSES_COLOR: &str = "red-darken-1";
/// Color token for a mixed stance.
pub const MIXED_COLOR: &str = "amber-darken-1";
/// Color token for an irrelevant stance.
pub const IRRELEVANT_COLOR: &str = "blue-grey-darken-1";
/// Color token for any unrecognized stance.
pub const FALLBACK_COLOR: &str = "gray";

/// Trim surrounding whitespace and lower-case a stance label.
#[must_use]
pub fn normalize_stance_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Map a raw stance label to its display color token.
#[must_use]
pub fn classify_stance_display(raw: &str) -> &'static str {
    Stance::parse(raw).display_color()
}

/// A claim-to-source stance.
///
/// Deserializes from any string. Labels outside the four known stances are
/// kept (normalized) in [`Stance::Unrecognized`]; `null` or a non-string
/// value becomes an empty [`Stance::Unrecognized`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Stance {
    /// The source supports the claim.
    Supports,
    /// The source contradicts the claim.
    Opposes,
    /// The source both supports and contradicts the claim.
    Mixed,
    /// The source does not bear on the claim.
    Irrelevant,
    /// Any other label, normalized.
    Unrecognized(String),
}

impl Stance {
    /// Parse a raw label.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let key = normalize_stance_key(raw);
        match key.as_str() {
            "supports" => Self::Supports,
            "opposes" => Self::Opposes,
            "mixed" => Self::Mixed,
            "irrelevant" => Self::Irrelevant,
            _ => Self::Unrecognized(key),
        }
    }

    /// Normalized key for this stance.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Supports => "supports",
            Self::Opposes => "opposes",
            Self::Mixed => "mixed",
            Self::Irrelevant => "irrelevant",
            Self::Unrecognized(key) => key,
        }
    }

    /// Display color token.
    #[must_use]
    pub const fn display_color(&self) -> &'static str {
        match self {
            Self::Supports => SUPPORTS_COLOR,
            Self::Opposes => OPPOSES_COLOR,
            Self::Mixed => MIXED_COLOR,
            Self::Irrelevant => IRRELEVANT_COLOR,
            Self::Unrecognized(_) => FALLBACK_COLOR,
        }
    }

    /// Whether a hit with this stance belongs in a supporting list.
    #[must_use]
    pub const fn fits_supporting(&self) -> bool {
        matches!(self, Self::Supports | Self::Mixed)
    }

    /// Whether a hit with this stance belongs in a counter list.
    #[must_use]
    pub const fn fits_counter(&self) -> bool {
        matches!(self, Self::Opposes | Self::Mixed)
    }

    /// True for labels outside the known set.
    #[must_use]
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for Stance {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Stance {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Stance> for String {
    fn from(stance: Stance) -> Self {
        match stance {
            Stance::Unrecognized(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Stance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<serde_json::Value>::deserialize(deserializer)? {
            Some(serde_json::Value::String(raw)) => Ok(Self::parse(&raw)),
            _ => Ok(Self::Unrecognized(String::new())),
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
