use std::sync::Arc;

use async_trait::async_trait;

use super::metric_traits::{Metric, MetricValues};
use crate::errors::Result;
use crate::prices::PriceServiceTrait;

/// Current price plus 1-day and 7-day percent changes.
pub struct PriceMetric {
    price_service: Arc<dyn PriceServiceTrait>,
}

impl PriceMetric {
    pub fn new(price_service: Arc<dyn PriceServiceTrait>) -> Self {
        Self { price_service }
    }
}

#[async_trait]
impl Metric for PriceMetric {
    fn name(&self) -> &'static str {
        "price"
    }

    async fn compute(&self, raw_symbol: &str) -> Result<MetricValues> {
        let snapshot = self.price_service.get_price(raw_symbol).await?;

        Ok(MetricValues::from([
            ("current".to_string(), Some(snapshot.current)),
            ("change_1d_pct".to_string(), Some(snapshot.change_1d_pct)),
            ("change_7d_pct".to_string(), Some(snapshot.change_7d_pct)),
        ]))
    }
}
