//! HTTP request handlers for the web adapter.

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::domain::artifact::RetrievalResult;
use crate::domain::query::ArtifactQuery;
use crate::domain::retrieval::retrieve;

use super::{AppState, WebError};

#[derive(Debug, serde::Deserialize)]
pub struct TechnicalAnalysisParams {
    pub symbol: Option<String>,
    pub date: Option<String>,
}

pub async fn technical_analysis(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TechnicalAnalysisParams>,
) -> Result<Json<RetrievalResult>, WebError> {
    let symbol = params
        .symbol
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| state.default_symbol.clone());

    let query = match params.date.filter(|d| !d.trim().is_empty()) {
        Some(date) => ArtifactQuery::new(symbol, date),
        None => ArtifactQuery::for_today(symbol),
    };

    let result = retrieve(state.storage.as_ref(), &query).await?;
    Ok(Json(result))
}

pub async fn health() -> &'static str {
    "ok"
}
