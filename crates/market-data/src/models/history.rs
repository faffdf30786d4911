use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single daily closing price.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyClose {
    /// Trading session timestamp
    pub timestamp: DateTime<Utc>,

    /// Closing price, never negative
    pub close: f64,
}

impl DailyClose {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    /// A close is usable when it is a finite, non-negative number.
    pub fn is_usable(&self) -> bool {
        self.close.is_finite() && self.close >= 0.0
    }
}

/// Shape a raw series of closes into a history window.
///
/// Unusable closes are dropped, the remaining points are ordered
/// oldest-to-newest and only the newest `days` entries are kept.
pub fn trim_to_recent(mut points: Vec<DailyClose>, days: usize) -> Vec<DailyClose> {
    points.retain(DailyClose::is_usable);
    points.sort_by_key(|p| p.timestamp);
    let excess = points.len().saturating_sub(days);
    points.drain(..excess);
    points
}
