//! Ticker symbol model and normalization.
//!
//! Every symbol handed to a market data provider goes through
//! [`normalize_ticker`] first. A [`Symbol`] cannot be built any other way,
//! so holding one proves the input matched the ticker grammar.
//!
//! ```
//! use stockeval_core::tickers::normalize_ticker;
//!
//! assert_eq!(normalize_ticker(" aapl ").unwrap().as_str(), "AAPL");
//! assert_eq!(normalize_ticker("brk.a").unwrap().as_str(), "BRK.A");
//! assert!(normalize_ticker("AAPL1").is_err());
//! ```

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

lazy_static! {
    /// 1-5 letters, optionally followed by a dot and a 1-2 letter class or
    /// exchange suffix.
    static ref TICKER_REGEX: Regex =
        Regex::new(r"^[A-Z]{1,5}(\.[A-Z]{1,2})?$").expect("Invalid regex pattern");
}

/// Reasons a raw ticker is rejected before any provider call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidTickerError {
    #[error("Ticker symbol cannot be missing.")]
    Missing,

    #[error("Ticker symbol cannot be empty.")]
    Empty,

    /// Carries the input exactly as received.
    #[error("Invalid ticker symbol format: '{0}'")]
    Format(String),
}

/// A canonical ticker symbol: trimmed, uppercase, grammar-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Trim and uppercase `raw`, then check it against the ticker grammar.
pub fn normalize_ticker(raw: &str) -> Result<Symbol, InvalidTickerError> {
    let candidate = raw.trim().to_uppercase();
    if candidate.is_empty() {
        return Err(InvalidTickerError::Empty);
    }
    if !TICKER_REGEX.is_match(&candidate) {
        return Err(InvalidTickerError::Format(raw.to_string()));
    }
    Ok(Symbol(candidate))
}

/// Like [`normalize_ticker`], treating an absent value as invalid input.
pub fn normalize_optional_ticker(raw: Option<&str>) -> Result<Symbol, InvalidTickerError> {
    match raw {
        Some(raw) => normalize_ticker(raw),
        None => Err(InvalidTickerError::Missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        assert_eq!(normalize_ticker(" aapl ").unwrap().as_str(), "AAPL");
        assert_eq!(normalize_ticker(" BRK.A").unwrap().as_str(), "BRK.A");
        assert_eq!(normalize_ticker("\tmsft\n").unwrap().as_str(), "MSFT");
    }

    #[test]
    fn test_accepts_suffix_forms() {
        assert!(normalize_ticker("RY.TO").is_ok());
        assert!(normalize_ticker("A").is_ok());
        assert!(normalize_ticker("GOOGL").is_ok());
    }

    #[test]
    fn test_empty_and_missing_are_rejected() {
        for raw in ["", "   ", "\t"] {
            let err = normalize_ticker(raw).unwrap_err();
            assert_eq!(err, InvalidTickerError::Empty);
            assert!(err.to_string().contains("cannot be"));
        }

        let err = normalize_optional_ticker(None).unwrap_err();
        assert_eq!(err, InvalidTickerError::Missing);
        assert!(err.to_string().contains("cannot be"));
    }

    #[test]
    fn test_format_errors_keep_raw_input() {
        let err = normalize_ticker(" aapl1 ").unwrap_err();
        assert_eq!(err, InvalidTickerError::Format(" aapl1 ".to_string()));
        assert_eq!(err.to_string(), "Invalid ticker symbol format: ' aapl1 '");
    }

    #[test]
    fn test_rejects_malformed_symbols() {
        for raw in [
            "TOOLONG",
            "BRK.ABC",
            "BRK..A",
            "A.B.C",
            ".A",
            "A.",
            "AA PL",
            "AAPL$",
            "12",
        ] {
            assert!(
                matches!(normalize_ticker(raw), Err(InvalidTickerError::Format(_))),
                "expected format error for {raw:?}"
            );
        }
    }

    #[test]
    fn test_optional_delegates_to_normalize() {
        assert_eq!(
            normalize_optional_ticker(Some("tsla")).unwrap().as_str(),
            "TSLA"
        );
    }

    #[test]
    fn test_symbol_serializes_as_plain_string() {
        let symbol = normalize_ticker("nvda").unwrap();
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"NVDA\"");
    }
}
