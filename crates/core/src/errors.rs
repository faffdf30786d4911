//! Core error types for the stock evaluator.
//!
//! Provider failures are carried unchanged inside [`Error::MarketData`] so
//! that callers can still tell "symbol does not exist" apart from "provider
//! could not answer".

use thiserror::Error;

use crate::tickers::InvalidTickerError;
use stockeval_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the evaluator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    InvalidTicker(#[from] InvalidTickerError),

    #[error("Ticker '{0}' does not exist")]
    TickerNotFound(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),
}

impl Error {
    /// True for both the existence check's own not-found error and a
    /// provider-reported unknown symbol.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::TickerNotFound(_) => true,
            Error::MarketData(e) => e.is_symbol_not_found(),
            _ => false,
        }
    }
}
