//! Yahoo Finance market data provider.
//!
//! Quotes and daily history come from the `yahoo_finance_api` connector.
//! Fundamentals (and the backup quote path) come from the quoteSummary API,
//! which requires a cookie/crumb pair.

mod models;

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::{header, StatusCode};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{trim_to_recent, DailyClose, LineItems, ProviderId, Quote, RawFundamentals};
use crate::provider::MarketDataProvider;

use models::{raw, YahooQuoteSummaryResponse, YahooQuoteSummaryResult, YahooValue};

const PROVIDER_ID: ProviderId = "YAHOO";

/// Extra calendar days requested on top of the lookback to cover weekends
/// and market holidays.
pub const HISTORY_BUFFER_DAYS: i64 = 7;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const FUNDAMENTALS_MODULES: &str = "summaryDetail,defaultKeyStatistics,financialData,\
incomeStatementHistory,balanceSheetHistory,cashflowStatementHistory";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new().map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to initialize Yahoo connector: {}", e),
            )
        })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    /// Map a connector error. "No quotes", "no result" and a chart API error
    /// coded "Not Found" mean the symbol is unknown.
    fn map_connector_error(symbol: &str, e: yahoo::YahooError) -> MarketDataError {
        match e {
            yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult => {
                MarketDataError::SymbolNotFound(symbol.to_string())
            }
            yahoo::YahooError::ApiError(ref message)
                if message
                    .code
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case("not found")) =>
            {
                MarketDataError::SymbolNotFound(symbol.to_string())
            }
            e => MarketDataError::provider(PROVIDER_ID, e.to_string()),
        }
    }

    /// Whether a failed primary quote fetch should fall through to the
    /// quoteSummary backup. A confirmed unknown symbol is final.
    fn should_try_backup(primary_error: &MarketDataError) -> bool {
        !primary_error.is_symbol_not_found()
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = YAHOO_CRUMB.read().unwrap_or_else(|e| e.into_inner());
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get cookie: {}", e))
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::provider(PROVIDER_ID, "Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to get crumb: {}", e))
            })?
            .text()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("Failed to read crumb: {}", e))
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = YAHOO_CRUMB.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    // ========================================================================
    // quoteSummary API
    // ========================================================================

    /// Fetch the requested quoteSummary modules for a symbol.
    async fn fetch_quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            encode(modules),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| {
                MarketDataError::provider(PROVIDER_ID, format!("quoteSummary request failed: {}", e))
            })?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                "Yahoo authentication expired",
            ));
        }

        let status = response.status();
        let data: YahooQuoteSummaryResponse = response.json().await.map_err(|e| {
            MarketDataError::provider(
                PROVIDER_ID,
                format!("Failed to parse quoteSummary response ({}): {}", status, e),
            )
        })?;

        if let Some(error) = data.quote_summary.error {
            if error.is_not_found() || status == StatusCode::NOT_FOUND {
                return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
            }
            return Err(MarketDataError::provider(
                PROVIDER_ID,
                error
                    .description
                    .unwrap_or_else(|| "quoteSummary returned an error".to_string()),
            ));
        }

        data.quote_summary
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Fetch latest quote using primary method (library API).
    async fn fetch_quote_primary(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| Self::map_connector_error(symbol, e))?;

        let yahoo_quote = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", symbol, e);
            MarketDataError::SymbolNotFound(symbol.to_string())
        })?;

        let timestamp = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()
            .ok_or_else(|| {
                MarketDataError::provider(
                    PROVIDER_ID,
                    format!("Invalid timestamp: {}", yahoo_quote.timestamp),
                )
            })?;

        Ok(Quote::new(symbol, timestamp, yahoo_quote.close, PROVIDER_ID))
    }

    /// Fetch latest quote using backup method (quoteSummary API).
    async fn fetch_quote_backup(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let result = self.fetch_quote_summary(symbol, "price").await?;

        let price = result
            .price
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))?;

        let value = raw(&price.regular_market_price).ok_or_else(|| {
            MarketDataError::provider(PROVIDER_ID, "No valid price in backup response")
        })?;

        let timestamp = price
            .regular_market_time
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .unwrap_or_else(Utc::now);

        let quote = Quote::new(symbol, timestamp, value, PROVIDER_ID);
        Ok(match price.currency {
            Some(currency) => quote.with_currency(currency),
            None => quote,
        })
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> ProviderId {
        PROVIDER_ID
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", symbol);

        match self.fetch_quote_primary(symbol).await {
            Ok(quote) => return Ok(quote),
            Err(e) if !Self::should_try_backup(&e) => return Err(e),
            Err(e) => {
                debug!(
                    "Primary quote fetch failed for {}: {}, trying backup",
                    symbol, e
                );
            }
        }

        self.fetch_quote_backup(symbol).await
    }

    async fn fetch_daily_history(
        &self,
        symbol: &str,
        days: usize,
    ) -> Result<Vec<DailyClose>, MarketDataError> {
        let end = Utc::now();
        let start = end - Duration::days(days as i64 + HISTORY_BUFFER_DAYS);

        debug!(
            "Fetching daily history for {} from {} to {} from Yahoo",
            symbol,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        );

        let response = self
            .connector
            .get_quote_history(
                symbol,
                chrono_to_offset_datetime(start),
                chrono_to_offset_datetime(end),
            )
            .await
            .map_err(|e| Self::map_connector_error(symbol, e))?;

        let yahoo_quotes = match response.quotes() {
            Ok(quotes) => quotes,
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No daily history returned for '{}'", symbol);
                return Ok(vec![]);
            }
            Err(e) => return Err(MarketDataError::provider(PROVIDER_ID, e.to_string())),
        };

        let points = yahoo_quotes
            .into_iter()
            .filter_map(|q| match Utc.timestamp_opt(q.timestamp as i64, 0).single() {
                Some(timestamp) => Some(DailyClose::new(timestamp, q.close)),
                None => {
                    warn!("Skipping quote with invalid timestamp {}", q.timestamp);
                    None
                }
            })
            .collect();

        Ok(trim_to_recent(points, days))
    }

    async fn fetch_fundamentals(&self, symbol: &str) -> Result<RawFundamentals, MarketDataError> {
        debug!("Fetching fundamentals for {} from Yahoo", symbol);

        let result = self
            .fetch_quote_summary(symbol, FUNDAMENTALS_MODULES)
            .await?;

        Ok(map_fundamentals(&result))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert chrono DateTime<Utc> to time::OffsetDateTime for the Yahoo API.
fn chrono_to_offset_datetime(dt: DateTime<Utc>) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(dt.timestamp()).unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn number(value: f64) -> Option<Value> {
    serde_json::Number::from_f64(value).map(Value::Number)
}

fn insert_info(info: &mut BTreeMap<String, Value>, key: &str, value: Option<f64>) {
    if let Some(v) = value.and_then(number) {
        info.insert(key.to_string(), v);
    }
}

/// Period label for a statement: the formatted end date, or the raw
/// timestamp rendered as `YYYY-MM-DD`.
fn period_label(end_date: &Option<YahooValue>) -> Option<String> {
    let end_date = end_date.as_ref()?;
    if let Some(fmt) = end_date.fmt.as_ref().filter(|f| !f.is_empty()) {
        return Some(fmt.clone());
    }
    end_date
        .raw
        .and_then(|ts| Utc.timestamp_opt(ts as i64, 0).single())
        .map(|dt| dt.format("%Y-%m-%d").to_string())
}

fn insert_line_item(items: &mut LineItems, name: &str, period: &str, value: Option<f64>) {
    if let Some(v) = value.and_then(number) {
        items
            .entry(name.to_string())
            .or_default()
            .insert(period.to_string(), v);
    }
}

/// Flatten a quoteSummary result into the provider-neutral bundle.
fn map_fundamentals(result: &YahooQuoteSummaryResult) -> RawFundamentals {
    let mut bundle = RawFundamentals::default();

    if let Some(detail) = &result.summary_detail {
        insert_info(&mut bundle.info, "marketCap", raw(&detail.market_cap));
        insert_info(&mut bundle.info, "trailingPE", raw(&detail.trailing_pe));
        insert_info(&mut bundle.info, "forwardPE", raw(&detail.forward_pe));
        insert_info(&mut bundle.info, "dividendYield", raw(&detail.dividend_yield));
        insert_info(&mut bundle.info, "beta", raw(&detail.beta));
        insert_info(&mut bundle.info, "fiftyTwoWeekHigh", raw(&detail.fifty_two_week_high));
        insert_info(&mut bundle.info, "fiftyTwoWeekLow", raw(&detail.fifty_two_week_low));
    }

    if let Some(stats) = &result.default_key_statistics {
        if !bundle.info.contains_key("forwardPE") {
            insert_info(&mut bundle.info, "forwardPE", raw(&stats.forward_pe));
        }
        insert_info(&mut bundle.info, "enterpriseValue", raw(&stats.enterprise_value));
        insert_info(&mut bundle.info, "priceToBook", raw(&stats.price_to_book));
    }

    if let Some(financial) = &result.financial_data {
        insert_info(&mut bundle.info, "currentPrice", raw(&financial.current_price));
        insert_info(&mut bundle.info, "returnOnEquity", raw(&financial.return_on_equity));
        insert_info(&mut bundle.info, "returnOnAssets", raw(&financial.return_on_assets));
        insert_info(&mut bundle.info, "freeCashflow", raw(&financial.free_cashflow));
        insert_info(&mut bundle.info, "totalRevenue", raw(&financial.total_revenue));
        if let Some(currency) = &financial.financial_currency {
            bundle
                .info
                .insert("financialCurrency".to_string(), Value::String(currency.clone()));
        }
    }

    if let Some(history) = &result.income_statement_history {
        for statement in &history.income_statement_history {
            let Some(period) = period_label(&statement.end_date) else {
                continue;
            };
            let items = &mut bundle.income_statement;
            insert_line_item(items, "Total Revenue", &period, raw(&statement.total_revenue));
            insert_line_item(items, "Gross Profit", &period, raw(&statement.gross_profit));
            insert_line_item(items, "Operating Income", &period, raw(&statement.operating_income));
            insert_line_item(items, "Net Income", &period, raw(&statement.net_income));
        }
    }

    if let Some(history) = &result.balance_sheet_history {
        for statement in &history.balance_sheet_statements {
            let Some(period) = period_label(&statement.end_date) else {
                continue;
            };
            let items = &mut bundle.balance_sheet;
            insert_line_item(items, "Total Assets", &period, raw(&statement.total_assets));
            insert_line_item(items, "Total Liabilities", &period, raw(&statement.total_liab));
            insert_line_item(
                items,
                "Stockholders Equity",
                &period,
                raw(&statement.total_stockholder_equity),
            );
            insert_line_item(items, "Cash", &period, raw(&statement.cash));
        }
    }

    if let Some(history) = &result.cashflow_statement_history {
        for statement in &history.cashflow_statements {
            let Some(period) = period_label(&statement.end_date) else {
                continue;
            };
            let operating = raw(&statement.total_cash_from_operating_activities);
            // Yahoo reports capital expenditures as a negative number.
            let capex = raw(&statement.capital_expenditures);
            let free_cash_flow = operating.zip(capex).map(|(ocf, capex)| ocf + capex);

            let items = &mut bundle.cashflow;
            insert_line_item(items, "Operating Cash Flow", &period, operating);
            insert_line_item(items, "Capital Expenditure", &period, capex);
            insert_line_item(items, "Free Cash Flow", &period, free_cash_flow);
        }
    }

    bundle
}

// ============================================================================
// Tests
// ============================================================================
