use std::sync::Arc;

use async_trait::async_trait;

use super::metric_traits::{Metric, MetricValues};
use crate::errors::Result;
use crate::fundamentals::FundamentalsServiceTrait;

/// Every derived fundamentals ratio, `None` where it could not be computed.
pub struct FundamentalsMetric {
    fundamentals_service: Arc<dyn FundamentalsServiceTrait>,
}

impl FundamentalsMetric {
    pub fn new(fundamentals_service: Arc<dyn FundamentalsServiceTrait>) -> Self {
        Self {
            fundamentals_service,
        }
    }
}

#[async_trait]
impl Metric for FundamentalsMetric {
    fn name(&self) -> &'static str {
        "fundamentals"
    }

    async fn compute(&self, raw_symbol: &str) -> Result<MetricValues> {
        let fundamentals = self.fundamentals_service.get_fundamentals(raw_symbol).await?;

        Ok(fundamentals
            .fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect())
    }
}
