use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use stockeval_market_data::MarketDataProvider;

use super::price_model::PriceSnapshot;
use super::price_traits::PriceServiceTrait;
use crate::constants::PRICE_LOOKBACK_DAYS;
use crate::errors::Result;
use crate::tickers::normalize_ticker;

/// Derives current price and trailing changes from daily history.
pub struct PriceService {
    provider: Arc<dyn MarketDataProvider>,
}

impl PriceService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl PriceServiceTrait for PriceService {
    async fn get_price(&self, raw_symbol: &str) -> Result<PriceSnapshot> {
        let symbol = normalize_ticker(raw_symbol)?;

        let window = self
            .provider
            .fetch_daily_history(symbol.as_str(), PRICE_LOOKBACK_DAYS)
            .await?;
        debug!("Received {} daily closes for {}", window.len(), symbol);

        PriceSnapshot::from_window(symbol, &window)
    }
}
