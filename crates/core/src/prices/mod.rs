//! Price derivation from daily closing history.

mod price_model;
mod price_service;
mod price_traits;

pub use price_model::{pct_change, PriceSnapshot};
pub use price_service::PriceService;
pub use price_traits::PriceServiceTrait;
