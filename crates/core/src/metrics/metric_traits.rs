use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::errors::Result;

/// Flat metric output keyed by unprefixed value name.
pub type MetricValues = BTreeMap<String, Option<f64>>;

/// A named group of values computed for one symbol.
///
/// The registry prefixes each key with `name()`, so the name must be unique
/// among registered metrics.
#[async_trait]
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;

    async fn compute(&self, raw_symbol: &str) -> Result<MetricValues>;
}
