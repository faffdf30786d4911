//! Fundamentals derivation.
//!
//! - **Calculations** (`calculations.rs`) - total numeric helpers over loosely typed values
//! - **Model** (`fundamentals_model.rs`) - the derived ratios and how each is computed
//! - **Service** (`fundamentals_service.rs`) - normalizes, fetches, derives

pub mod calculations;
mod fundamentals_model;
mod fundamentals_service;
mod fundamentals_traits;

pub use fundamentals_model::Fundamentals;
pub use fundamentals_service::FundamentalsService;
pub use fundamentals_traits::FundamentalsServiceTrait;
