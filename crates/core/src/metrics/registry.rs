use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, warn};
use serde::Serialize;

use super::fundamentals_metric::FundamentalsMetric;
use super::metric_traits::Metric;
use super::price_metric::PriceMetric;
use crate::errors::Result;
use crate::fundamentals::FundamentalsServiceTrait;
use crate::prices::PriceServiceTrait;
use crate::tickers::{normalize_ticker, Symbol};

/// All metric values for one symbol, keyed `<metric>.<value>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub ticker: Symbol,
    pub metrics: BTreeMap<String, Option<f64>>,
}

/// Ordered set of metrics evaluated together.
#[derive(Clone, Default)]
pub struct MetricRegistry {
    metrics: Vec<Arc<dyn Metric>>,
}

impl MetricRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the price metric followed by the fundamentals metric.
    pub fn with_defaults(
        price_service: Arc<dyn PriceServiceTrait>,
        fundamentals_service: Arc<dyn FundamentalsServiceTrait>,
    ) -> Self {
        Self::new()
            .register(Arc::new(PriceMetric::new(price_service)))
            .register(Arc::new(FundamentalsMetric::new(fundamentals_service)))
    }

    /// Append a metric; metrics run in registration order.
    pub fn register(mut self, metric: Arc<dyn Metric>) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Run every metric for the symbol and merge their values.
    ///
    /// The first failing metric aborts the evaluation and its error is
    /// returned as is; no partial report is produced.
    pub async fn evaluate_all(&self, raw_symbol: &str) -> Result<MetricReport> {
        let ticker = normalize_ticker(raw_symbol)?;
        let mut merged = BTreeMap::new();

        for metric in &self.metrics {
            let name = metric.name();
            let values = metric.compute(raw_symbol).await?;
            debug!("Metric '{}' produced {} values for {}", name, values.len(), ticker);

            for (key, value) in values {
                let full_key = format!("{}.{}", name, key);
                if merged.insert(full_key.clone(), value).is_some() {
                    warn!("Metric key '{}' was produced twice; keeping the later value", full_key);
                }
            }
        }

        Ok(MetricReport {
            ticker,
            metrics: merged,
        })
    }
}
