/// Trading days of history used for the trailing price change
pub const PRICE_LOOKBACK_DAYS: usize = 7;

/// Minimum history points needed to compute any change
pub const MIN_HISTORY_POINTS: usize = 2;

/// Upper bound, in periods, of the revenue growth window
pub const REVENUE_CAGR_MAX_YEARS: usize = 5;

/// Info key for return on invested capital
pub const INFO_RETURN_ON_INVESTED_CAPITAL: &str = "returnOnInvestedCapital";

/// Info key for return on equity, used when ROIC is absent
pub const INFO_RETURN_ON_EQUITY: &str = "returnOnEquity";

/// Cashflow line item holding free cash flow per period
pub const LINE_FREE_CASH_FLOW: &str = "Free Cash Flow";

/// Income statement line item holding revenue per period
pub const LINE_TOTAL_REVENUE: &str = "Total Revenue";
