//! Metric aggregation.
//!
//! A [`Metric`] computes a flat set of values for one symbol. The
//! [`MetricRegistry`] runs its metrics in order and merges their output under
//! `<metric name>.` prefixes.

mod fundamentals_metric;
mod metric_traits;
mod price_metric;
mod registry;

pub use fundamentals_metric::FundamentalsMetric;
pub use metric_traits::{Metric, MetricValues};
pub use price_metric::PriceMetric;
pub use registry::{MetricRegistry, MetricReport};
