use async_trait::async_trait;

use super::ticker_model::Symbol;
use crate::errors::Result;

/// Trait for ticker existence checks.
#[async_trait]
pub trait TickerServiceTrait: Send + Sync {
    /// Whether the provider knows the symbol. Provider failures other than
    /// "not found" are returned as errors, never as `false`.
    async fn exists(&self, raw_symbol: &str) -> Result<bool>;

    /// Fail-fast variant of [`exists`](Self::exists) returning the
    /// normalized symbol or `Error::TickerNotFound`.
    async fn validate_ticker(&self, raw_symbol: &str) -> Result<Symbol>;
}
