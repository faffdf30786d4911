//! Ticker normalization and existence checks.

mod ticker_model;
mod ticker_service;
mod ticker_traits;

pub use ticker_model::{normalize_optional_ticker, normalize_ticker, InvalidTickerError, Symbol};
pub use ticker_service::TickerService;
pub use ticker_traits::TickerServiceTrait;
