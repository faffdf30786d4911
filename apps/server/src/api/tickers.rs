use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use stockeval_core::{tickers::Symbol, TickerServiceTrait};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Serialize)]
struct TickerValidationResponse {
    symbol: Symbol,
    valid: bool,
}

async fn validate_ticker(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TickerValidationResponse>> {
    let normalized = state
        .ticker_service
        .validate_ticker(&symbol)
        .await
        .map_err(ApiError::wrap(&symbol))?;
    Ok(Json(TickerValidationResponse {
        symbol: normalized,
        valid: true,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/tickers/{symbol}/validate", get(validate_ticker))
}
