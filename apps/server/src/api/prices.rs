use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stockeval_core::{PriceServiceTrait, PriceSnapshot};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

async fn get_price(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceSnapshot>> {
    let snapshot = state
        .price_service
        .get_price(&symbol)
        .await
        .map_err(ApiError::wrap(&symbol))?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/price/{symbol}", get(get_price))
}
