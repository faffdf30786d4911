//! Error types for the market data crate.
//!
//! Providers report failures through [`MarketDataError`], which deliberately
//! has only two variants. Callers rely on the split between "the symbol does
//! not exist" and "the provider could not answer" to pick client-visible
//! status codes, so no other failure kind may leak out of a provider.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider confirmed that the requested symbol does not exist.
    /// This is a terminal error - retrying won't help.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider call failed for any other reason: network, parsing,
    /// rate limiting or an unexpected payload shape.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },
}

impl MarketDataError {
    /// Build a [`MarketDataError::ProviderError`] for the given provider.
    pub fn provider(provider: &str, message: impl Into<String>) -> Self {
        Self::ProviderError {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// Returns true when the provider confirmed the symbol does not exist.
    pub fn is_symbol_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(err: reqwest::Error) -> Self {
        let provider = err
            .url()
            .and_then(|url| url.host_str())
            .unwrap_or("HTTP")
            .to_string();
        Self::ProviderError {
            provider,
            message: format!("Network error: {}", err),
        }
    }
}
