//! In-memory market data provider for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use stockeval_market_data::{
    DailyClose, MarketDataError, MarketDataProvider, ProviderId, Quote, RawFundamentals,
};

/// Canned answer for one provider operation.
#[derive(Clone)]
pub enum FakeResponse<T> {
    Value(T),
    NotFound,
    ProviderFailure,
}

impl<T: Clone> FakeResponse<T> {
    fn resolve(&self, symbol: &str) -> Result<T, MarketDataError> {
        match self {
            FakeResponse::Value(v) => Ok(v.clone()),
            FakeResponse::NotFound => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
            FakeResponse::ProviderFailure => {
                Err(MarketDataError::provider("FAKE", "upstream unavailable"))
            }
        }
    }
}

/// Provider returning canned responses and recording requested symbols.
pub struct FakeProvider {
    quote: FakeResponse<Quote>,
    history: FakeResponse<Vec<DailyClose>>,
    fundamentals: FakeResponse<RawFundamentals>,
    calls: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            quote: FakeResponse::Value(Quote::new("FAKE", Utc::now(), 100.0, "FAKE")),
            history: FakeResponse::Value(Vec::new()),
            fundamentals: FakeResponse::Value(RawFundamentals::default()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_quote(mut self, quote: FakeResponse<Quote>) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_history(mut self, history: FakeResponse<Vec<DailyClose>>) -> Self {
        self.history = history;
        self
    }

    /// History of consecutive daily closes, oldest first.
    pub fn with_closes(self, closes: &[f64]) -> Self {
        self.with_history(FakeResponse::Value(daily_closes(closes)))
    }

    pub fn with_fundamentals(mut self, fundamentals: FakeResponse<RawFundamentals>) -> Self {
        self.fundamentals = fundamentals;
        self
    }

    /// Symbols passed to the provider, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, symbol: &str) {
        self.calls.lock().unwrap().push(symbol.to_string());
    }
}

pub fn daily_closes(closes: &[f64]) -> Vec<DailyClose> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 21, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| DailyClose::new(start + Duration::days(i as i64), *close))
        .collect()
}

#[async_trait]
impl MarketDataProvider for FakeProvider {
    fn id(&self) -> ProviderId {
        "FAKE"
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        self.record(symbol);
        self.quote.resolve(symbol)
    }

    async fn fetch_daily_history(
        &self,
        symbol: &str,
        days: usize,
    ) -> Result<Vec<DailyClose>, MarketDataError> {
        self.record(symbol);
        let mut history = self.history.resolve(symbol)?;
        let excess = history.len().saturating_sub(days);
        history.drain(..excess);
        Ok(history)
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<RawFundamentals, MarketDataError> {
        self.record(symbol);
        self.fundamentals.resolve(symbol)
    }
}
