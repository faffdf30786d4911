//! Market data models
//!
//! This module contains the data types exchanged with providers:
//! - `quote` - Latest quote for a symbol (Quote)
//! - `history` - Daily closing prices and history windows (DailyClose)
//! - `fundamentals` - Raw financial statement data (RawFundamentals)
//! - `types` - Type aliases for common identifiers

mod fundamentals;
mod history;
mod quote;
mod types;

pub use fundamentals::{LineItems, RawFundamentals};
pub use history::{trim_to_recent, DailyClose};
pub use quote::Quote;
pub use types::ProviderId;
