//! Stock Evaluator Market Data Crate
//!
//! This crate defines the contract between the evaluation core and upstream
//! market data sources, plus a Yahoo Finance implementation of it.
//!
//! # Overview
//!
//! A provider answers three questions about an already-normalized symbol:
//! - its latest quote (used to test existence)
//! - its recent daily closing prices
//! - its raw fundamentals (general info and financial statements)
//!
//! Every failure is reported as either [`MarketDataError::SymbolNotFound`] or
//! [`MarketDataError::ProviderError`].
//!
//! # Core Types
//!
//! - [`MarketDataProvider`] - The provider contract
//! - [`Quote`] - Latest market quote
//! - [`DailyClose`] - A single daily close; a `Vec` of them is a history window
//! - [`RawFundamentals`] - Semi-structured statement data

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;

pub use models::{trim_to_recent, DailyClose, LineItems, ProviderId, Quote, RawFundamentals};

pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
