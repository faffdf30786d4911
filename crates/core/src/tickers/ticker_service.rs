use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use stockeval_market_data::{MarketDataError, MarketDataProvider};

use super::ticker_model::{normalize_ticker, Symbol};
use super::ticker_traits::TickerServiceTrait;
use crate::errors::{Error, Result};

/// Checks whether a ticker exists by asking the provider for a quote.
pub struct TickerService {
    provider: Arc<dyn MarketDataProvider>,
}

impl TickerService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    async fn symbol_exists(&self, symbol: &Symbol) -> Result<bool> {
        match self.provider.fetch_quote(symbol.as_str()).await {
            Ok(_) => Ok(true),
            Err(MarketDataError::SymbolNotFound(_)) => {
                debug!("Provider {} has no symbol {}", self.provider.id(), symbol);
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl TickerServiceTrait for TickerService {
    async fn exists(&self, raw_symbol: &str) -> Result<bool> {
        let symbol = normalize_ticker(raw_symbol)?;
        self.symbol_exists(&symbol).await
    }

    async fn validate_ticker(&self, raw_symbol: &str) -> Result<Symbol> {
        let symbol = normalize_ticker(raw_symbol)?;
        if self.symbol_exists(&symbol).await? {
            Ok(symbol)
        } else {
            Err(Error::TickerNotFound(symbol.into_inner()))
        }
    }
}
