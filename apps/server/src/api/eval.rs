use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use stockeval_core::{tickers::normalize_optional_ticker, MetricReport};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Deserialize)]
struct EvalQuery {
    ticker: Option<String>,
}

async fn evaluate(state: &AppState, raw_symbol: &str) -> ApiResult<Json<MetricReport>> {
    let report = state
        .metric_registry
        .evaluate_all(raw_symbol)
        .await
        .map_err(ApiError::wrap(raw_symbol))?;
    Ok(Json(report))
}

async fn evaluate_symbol(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MetricReport>> {
    evaluate(&state, &symbol).await
}

async fn evaluate_query(
    Query(query): Query<EvalQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<MetricReport>> {
    let raw = query.ticker.as_deref();
    normalize_optional_ticker(raw)
        .map_err(|e| ApiError::new(e.into(), raw.unwrap_or_default()))?;
    evaluate(&state, raw.unwrap_or_default()).await
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/eval", get(evaluate_query))
        .route("/eval/{symbol}", get(evaluate_symbol))
}
