//! Retrieval query value type.

use chrono::Utc;

/// Immutable input for one retrieval: which symbol, which calendar day.
///
/// The date is kept as a string because the producer namespace is keyed by
/// text, not by parsed dates. An unparseable date is not rejected here; it
/// simply addresses a prefix no producer ever wrote to, and the lookup
/// reports "no data".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactQuery {
    pub symbol: String,
    pub date: String,
}

impl ArtifactQuery {
    pub fn new(symbol: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            date: date.into(),
        }
    }

    /// Query for today's artifacts, with the date taken from the UTC clock.
    pub fn for_today(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Utc::now().format("%Y-%m-%d").to_string())
    }

    /// Storage prefix scoping the listing request. This is the sole filter
    /// passed to the storage layer.
    pub fn storage_prefix(&self) -> String {
        format!("daily/{}/{}", self.date, self.symbol)
    }
}
