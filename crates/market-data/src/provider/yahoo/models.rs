//! Yahoo Finance API response models.
//!
//! These models are used for parsing the quoteSummary API responses, which
//! carry both the backup price data and the financial statements.

use serde::Deserialize;

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
///
/// Unknown symbols come back with `result: null` and a populated `error`.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    #[serde(default)]
    pub result: Option<Vec<YahooQuoteSummaryResult>>,
    #[serde(default)]
    pub error: Option<YahooSummaryError>,
}

#[derive(Debug, Deserialize)]
pub struct YahooSummaryError {
    pub code: Option<String>,
    pub description: Option<String>,
}

impl YahooSummaryError {
    pub fn is_not_found(&self) -> bool {
        self.code
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case("not found"))
    }
}

/// Individual result from quoteSummary API
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
    pub default_key_statistics: Option<YahooKeyStatistics>,
    pub financial_data: Option<YahooFinancialData>,
    pub income_statement_history: Option<YahooIncomeStatementHistory>,
    pub balance_sheet_history: Option<YahooBalanceSheetHistory>,
    pub cashflow_statement_history: Option<YahooCashflowStatementHistory>,
}

/// Price data from quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub regular_market_price: Option<YahooValue>,
    pub regular_market_time: Option<i64>,
}

/// Numeric value with raw and formatted representations.
///
/// Yahoo returns these as `{"raw": 123.45, "fmt": "123.45"}`, or as empty
/// objects `{}` when no data is available.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct YahooValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

/// Raw number of an optional value, if any.
pub fn raw(value: &Option<YahooValue>) -> Option<f64> {
    value.as_ref().and_then(|v| v.raw)
}

/// Valuation and yield figures
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<YahooValue>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<YahooValue>,
    pub dividend_yield: Option<YahooValue>,
    pub beta: Option<YahooValue>,
    pub fifty_two_week_high: Option<YahooValue>,
    pub fifty_two_week_low: Option<YahooValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooKeyStatistics {
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<YahooValue>,
    pub enterprise_value: Option<YahooValue>,
    pub price_to_book: Option<YahooValue>,
}

/// Profitability and cash figures (trailing twelve months)
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooFinancialData {
    pub current_price: Option<YahooValue>,
    pub return_on_equity: Option<YahooValue>,
    pub return_on_assets: Option<YahooValue>,
    pub free_cashflow: Option<YahooValue>,
    pub total_revenue: Option<YahooValue>,
    pub financial_currency: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooIncomeStatementHistory {
    #[serde(default)]
    pub income_statement_history: Vec<YahooIncomeStatement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooIncomeStatement {
    pub end_date: Option<YahooValue>,
    pub total_revenue: Option<YahooValue>,
    pub gross_profit: Option<YahooValue>,
    pub operating_income: Option<YahooValue>,
    pub net_income: Option<YahooValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooBalanceSheetHistory {
    #[serde(default)]
    pub balance_sheet_statements: Vec<YahooBalanceSheet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooBalanceSheet {
    pub end_date: Option<YahooValue>,
    pub total_assets: Option<YahooValue>,
    pub total_liab: Option<YahooValue>,
    pub total_stockholder_equity: Option<YahooValue>,
    pub cash: Option<YahooValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooCashflowStatementHistory {
    #[serde(default)]
    pub cashflow_statements: Vec<YahooCashflowStatement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooCashflowStatement {
    pub end_date: Option<YahooValue>,
    pub total_cash_from_operating_activities: Option<YahooValue>,
    pub capital_expenditures: Option<YahooValue>,
}
