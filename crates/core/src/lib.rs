//! Stock Evaluator Core - ticker validation and metric derivation.
//!
//! This crate holds the business logic of the evaluator. It talks to market
//! data only through the `MarketDataProvider` trait from the
//! `stockeval-market-data` crate, so any provider (or a test fake) can be
//! injected at construction time.

pub mod constants;
pub mod errors;
pub mod fundamentals;
pub mod metrics;
pub mod prices;
pub mod tickers;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export common types
pub use fundamentals::{Fundamentals, FundamentalsService, FundamentalsServiceTrait};
pub use metrics::{Metric, MetricRegistry, MetricReport, MetricValues};
pub use prices::{PriceService, PriceServiceTrait, PriceSnapshot};
pub use tickers::{normalize_ticker, InvalidTickerError, Symbol, TickerService, TickerServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
