use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockeval_core::{Fundamentals, FundamentalsServiceTrait};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_fundamentals(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Fundamentals>> {
    let fundamentals = state
        .fundamentals_service
        .get_fundamentals(&symbol)
        .await
        .map_err(ApiError::wrap(&symbol))?;
    Ok(Json(fundamentals))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/fundamentals/{symbol}", get(get_fundamentals))
}
