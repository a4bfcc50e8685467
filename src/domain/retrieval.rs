//! Retrieval orchestration: list, locate, load, assemble.

use serde_json::Value;
use tracing::{debug, error};

use crate::domain::artifact::{ArtifactCategory, RetrievalResult};
use crate::domain::error::TavaultError;
use crate::domain::locate::locate;
use crate::domain::query::ArtifactQuery;
use crate::ports::storage_port::StoragePort;

/// Download the object at `key` and parse it as a JSON document.
///
/// The payload passes through opaquely; no schema is imposed. A fetch
/// failure is a transient storage problem, a parse failure is not — the
/// bytes are stable, so retrying a malformed artifact cannot help.
pub async fn load(
    storage: &dyn StoragePort,
    key: &str,
    category: ArtifactCategory,
) -> Result<Value, TavaultError> {
    let bytes = storage.fetch_object(key).await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        error!(key, %category, "artifact is not valid JSON: {e}");
        TavaultError::MalformedArtifact {
            key: key.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Run one full retrieval for `query`: one listing call, then up to two
/// downloads. No caching, no internal retries; concurrent calls share
/// nothing but the storage client.
///
/// The signals artifact is mandatory. The analysis artifact degrades to
/// `None` only when no candidate key was listed — a located analysis object
/// that fails to download or parse fails the whole retrieval, so integrity
/// problems are surfaced rather than hidden behind a null.
pub async fn retrieve(
    storage: &dyn StoragePort,
    query: &ArtifactQuery,
) -> Result<RetrievalResult, TavaultError> {
    let prefix = query.storage_prefix();
    let keys = storage.list_prefix(&prefix).await?;
    let located = locate(query, &keys)?;
    debug!(
        signals = %located.signals_key,
        analysis = located.analysis_key.as_deref().unwrap_or("<none>"),
        "selected artifact keys"
    );

    let technical_data = load(storage, &located.signals_key, ArtifactCategory::Signals).await?;
    let gemini_analysis = match &located.analysis_key {
        Some(key) => Some(load(storage, key, ArtifactCategory::Analysis).await?),
        None => None,
    };

    Ok(RetrievalResult {
        technical_data,
        gemini_analysis,
    })
}
