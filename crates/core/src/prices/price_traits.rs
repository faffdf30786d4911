use async_trait::async_trait;

use super::price_model::PriceSnapshot;
use crate::errors::Result;

/// Trait for price derivation.
#[async_trait]
pub trait PriceServiceTrait: Send + Sync {
    async fn get_price(&self, raw_symbol: &str) -> Result<PriceSnapshot>;
}
