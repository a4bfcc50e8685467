//! Artifact categories, key ordering, and the assembled result.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

/// The two kinds of artifact the offline job produces per symbol and day.
///
/// Signals is mandatory for a retrieval to succeed; Analysis is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactCategory {
    Signals,
    Analysis,
}

impl ArtifactCategory {
    /// Substring marker identifying this category in an object key.
    pub fn marker(&self) -> &'static str {
        match self {
            ArtifactCategory::Signals => "signals",
            ArtifactCategory::Analysis => "analysis",
        }
    }

    /// Category membership test for a candidate key. The two categories are
    /// tested independently; nothing here assumes a key matches only one.
    pub fn matches(&self, key: &str) -> bool {
        key.ends_with(".json") && key.contains(self.marker())
    }
}

impl std::fmt::Display for ArtifactCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactCategory::Signals => write!(f, "signals"),
            ArtifactCategory::Analysis => write!(f, "analysis"),
        }
    }
}

/// Recency ordering for artifact keys sharing a prefix.
///
/// The producer encodes production time into the key text and offers no
/// explicit version metadata, so lexicographic order stands in for
/// chronological order. Kept behind this one function so the strategy can
/// be swapped if the producer ever grows real metadata. Note the producer
/// is not validated against this assumption (a non-zero-padded hour would
/// break it); that fragility is inherited deliberately.
pub fn compare_recency(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// The assembled response: the parsed signals document plus the parsed
/// analysis document when one exists. `gemini_analysis` is serialized as an
/// explicit `null` when absent so consumers can tell "not yet produced"
/// from a dropped field.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalResult {
    pub technical_data: Value,
    pub gemini_analysis: Option<Value>,
}
