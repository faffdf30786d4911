use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use stockeval_market_data::MarketDataProvider;

use super::fundamentals_model::Fundamentals;
use super::fundamentals_traits::FundamentalsServiceTrait;
use crate::errors::Result;
use crate::tickers::normalize_ticker;

/// Derives valuation and quality ratios from raw statement data.
pub struct FundamentalsService {
    provider: Arc<dyn MarketDataProvider>,
}

impl FundamentalsService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl FundamentalsServiceTrait for FundamentalsService {
    async fn get_fundamentals(&self, raw_symbol: &str) -> Result<Fundamentals> {
        let symbol = normalize_ticker(raw_symbol)?;

        let raw = self.provider.fetch_fundamentals(symbol.as_str()).await?;
        debug!(
            "Fetched fundamentals for {}: {} info keys, {} income items, {} cashflow items",
            symbol,
            raw.info.len(),
            raw.income_statement.len(),
            raw.cashflow.len()
        );

        Ok(Fundamentals::from_raw(symbol, &raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::test_support::{FakeProvider, FakeResponse};
    use serde_json::{json, Value};
    use stockeval_market_data::{MarketDataError, RawFundamentals};

    fn bundle(value: Value) -> RawFundamentals {
        serde_json::from_value(value).unwrap()
    }

    fn fundamentals_service(raw: FakeResponse<RawFundamentals>) -> FundamentalsService {
        FundamentalsService::new(Arc::new(FakeProvider::new().with_fundamentals(raw)))
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("expected a value");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[tokio::test]
    async fn test_derives_all_fields() {
        let raw = bundle(json!({
            "info": {
                "marketCap": 1000,
                "trailingPE": 25,
                "forwardPE": 20,
                "dividendYield": 0.01,
                "returnOnInvestedCapital": 0.15
            },
            "cashflow": {"Free Cash Flow": {"2024": 50}},
            "income_statement": {"Total Revenue": {"2019": 100, "2024": 200}}
        }));
        let service = fundamentals_service(FakeResponse::Value(raw));

        let f = service.get_fundamentals("aapl").await.unwrap();

        assert_eq!(f.symbol.as_str(), "AAPL");
        assert_close(f.pe_ttm, 25.0);
        assert_close(f.pe_forward, 20.0);
        assert_close(f.market_cap, 1000.0);
        assert_close(f.dividend_yield, 1.0);
        assert_close(f.return_on_invested_capital, 15.0);
        assert_close(f.fcf_yield, 5.0);
        assert_close(f.revenue_growth_5y, 100.0);
    }

    #[tokio::test]
    async fn test_nan_revenue_only_blanks_growth() {
        let raw = bundle(json!({
            "info": {"marketCap": 1000, "trailingPE": 25},
            "income_statement": {"Total Revenue": {"2019": "NaN", "2024": 200}}
        }));
        let service = fundamentals_service(FakeResponse::Value(raw));

        let f = service.get_fundamentals("AAPL").await.unwrap();

        assert_eq!(f.revenue_growth_5y, None);
        assert_close(f.pe_ttm, 25.0);
        assert_close(f.market_cap, 1000.0);
    }

    #[tokio::test]
    async fn test_roic_fallback_policy() {
        let absent = bundle(json!({"info": {"returnOnEquity": 0.10}}));
        let f = fundamentals_service(FakeResponse::Value(absent))
            .get_fundamentals("AAPL")
            .await
            .unwrap();
        assert_close(f.return_on_invested_capital, 10.0);

        let malformed = bundle(json!({
            "info": {"returnOnInvestedCapital": "not-a-number", "returnOnEquity": 0.10}
        }));
        let f = fundamentals_service(FakeResponse::Value(malformed))
            .get_fundamentals("AAPL")
            .await
            .unwrap();
        assert_eq!(f.return_on_invested_capital, None);
    }

    #[tokio::test]
    async fn test_provider_errors_propagate_unchanged() {
        let err = fundamentals_service(FakeResponse::NotFound)
            .get_fundamentals("ZZZZ")
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        let err = fundamentals_service(FakeResponse::ProviderFailure)
            .get_fundamentals("AAPL")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MarketData(MarketDataError::ProviderError { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_ticker_is_rejected() {
        let err = fundamentals_service(FakeResponse::Value(RawFundamentals::default()))
            .get_fundamentals("   ")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTicker(_)));
    }
}
