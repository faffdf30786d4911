//! Market data provider trait definitions.
//!
//! This module defines the core `MarketDataProvider` trait that all
//! market data providers must implement.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{DailyClose, ProviderId, Quote, RawFundamentals};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new market data source, or to
/// substitute a fake in tests. Every method either returns data or fails with
/// one of the two [`MarketDataError`] variants; `SymbolNotFound` must be used
/// only when the provider positively knows the symbol does not exist.
///
/// Symbols passed in have already been normalized by the caller.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockeval_market_data::provider::MarketDataProvider;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO".
    /// Used for logging and error reporting.
    fn id(&self) -> ProviderId;

    /// Fetch the latest quote for a symbol.
    ///
    /// Any successful quote means the symbol exists.
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;

    /// Fetch daily closing prices for the most recent `days` trading days.
    ///
    /// Implementations fetch a few extra calendar days to absorb weekends and
    /// holidays, then return at most `days` points ordered oldest-to-newest.
    async fn fetch_daily_history(
        &self,
        symbol: &str,
        days: usize,
    ) -> Result<Vec<DailyClose>, MarketDataError>;

    /// Fetch general info and financial statements for a symbol.
    async fn fetch_fundamentals(&self, symbol: &str) -> Result<RawFundamentals, MarketDataError>;
}
