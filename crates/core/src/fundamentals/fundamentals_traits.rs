use async_trait::async_trait;

use super::fundamentals_model::Fundamentals;
use crate::errors::Result;

/// Trait for fundamentals derivation.
#[async_trait]
pub trait FundamentalsServiceTrait: Send + Sync {
    async fn get_fundamentals(&self, raw_symbol: &str) -> Result<Fundamentals>;
}
