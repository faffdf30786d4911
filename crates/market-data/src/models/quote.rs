use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest market quote for a symbol.
///
/// Only the presence of a quote matters to most callers: a provider that
/// returns one has confirmed the symbol is tradable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Symbol the quote was fetched for
    pub symbol: String,

    /// Timestamp of the quote
    pub timestamp: DateTime<Utc>,

    /// Last traded price
    pub price: f64,

    /// Quote currency, when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Source of the quote (YAHOO, ...)
    pub source: String,
}

impl Quote {
    /// Create a new quote with minimal required fields
    pub fn new(symbol: &str, timestamp: DateTime<Utc>, price: f64, source: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            timestamp,
            price,
            currency: None,
            source: source.to_string(),
        }
    }

    /// Attach a currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}
