use serde::Serialize;
use serde_json::Value;
use stockeval_market_data::RawFundamentals;

use super::calculations::{
    cagr_percent, latest_numeric, percent_from_decimal, ratio_percent, try_coerce_float,
};
use crate::constants::{
    INFO_RETURN_ON_EQUITY, INFO_RETURN_ON_INVESTED_CAPITAL, LINE_FREE_CASH_FLOW,
    LINE_TOTAL_REVENUE, REVENUE_CAGR_MAX_YEARS,
};
use crate::tickers::Symbol;

/// Valuation and quality ratios for a symbol.
///
/// Each field is derived on its own; a missing or malformed input only
/// blanks the field that depends on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fundamentals {
    pub symbol: Symbol,
    pub pe_ttm: Option<f64>,
    pub pe_forward: Option<f64>,
    pub market_cap: Option<f64>,
    /// Percent
    pub dividend_yield: Option<f64>,
    /// Percent, from return on equity when ROIC is not reported
    pub return_on_invested_capital: Option<f64>,
    /// Percent of market cap
    pub fcf_yield: Option<f64>,
    /// Percent per period
    pub revenue_growth_5y: Option<f64>,
}

impl Fundamentals {
    pub fn from_raw(symbol: Symbol, raw: &RawFundamentals) -> Self {
        let market_cap = try_coerce_float(raw.info_value("marketCap"));
        let free_cash_flow = latest_numeric(raw.cashflow_item(LINE_FREE_CASH_FLOW));

        Self {
            symbol,
            pe_ttm: try_coerce_float(raw.info_value("trailingPE")),
            pe_forward: try_coerce_float(raw.info_value("forwardPE")),
            market_cap,
            dividend_yield: percent_from_decimal(raw.info_value("dividendYield")),
            return_on_invested_capital: return_on_capital(raw),
            fcf_yield: ratio_percent(free_cash_flow, market_cap),
            revenue_growth_5y: cagr_percent(
                raw.income_item(LINE_TOTAL_REVENUE),
                REVENUE_CAGR_MAX_YEARS,
            ),
        }
    }

    /// Field name and value pairs, in declaration order.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 7] {
        [
            ("pe_ttm", self.pe_ttm),
            ("pe_forward", self.pe_forward),
            ("market_cap", self.market_cap),
            ("dividend_yield", self.dividend_yield),
            ("return_on_invested_capital", self.return_on_invested_capital),
            ("fcf_yield", self.fcf_yield),
            ("revenue_growth_5y", self.revenue_growth_5y),
        ]
    }
}

/// ROIC as a percent. Return on equity is used only when the ROIC key is
/// absent or null; a present but malformed ROIC yields `None`.
fn return_on_capital(raw: &RawFundamentals) -> Option<f64> {
    match raw.info_value(INFO_RETURN_ON_INVESTED_CAPITAL) {
        None | Some(Value::Null) => percent_from_decimal(raw.info_value(INFO_RETURN_ON_EQUITY)),
        roic => percent_from_decimal(roic),
    }
}
