use serde::Serialize;
use stockeval_market_data::DailyClose;

use crate::constants::MIN_HISTORY_POINTS;
use crate::errors::{Error, Result};
use crate::tickers::Symbol;

/// Current price and trailing percent changes for a symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSnapshot {
    pub symbol: Symbol,
    pub current: f64,
    pub change_1d_pct: f64,
    pub change_7d_pct: f64,
}

impl PriceSnapshot {
    /// Derive a snapshot from a history window ordered oldest-to-newest.
    ///
    /// The 1-day change compares against the second-newest close and the
    /// 7-day change against the oldest close in the window.
    pub fn from_window(symbol: Symbol, window: &[DailyClose]) -> Result<Self> {
        if window.len() < MIN_HISTORY_POINTS {
            return Err(Error::InsufficientData(format!(
                "Not enough price data for symbol '{}'.",
                symbol
            )));
        }

        let current = window[window.len() - 1].close;
        let previous = window[window.len() - 2].close;
        let oldest = window[0].close;

        Ok(Self {
            symbol,
            current,
            change_1d_pct: pct_change(current, previous),
            change_7d_pct: pct_change(current, oldest),
        })
    }
}

/// Percent change from `previous` to `current`; `0.0` when `previous` is zero.
pub fn pct_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}
