use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Line-item name -> period label -> raw value.
///
/// Period labels sort lexicographically, so the last entry of each inner map
/// is the most recent period.
pub type LineItems = BTreeMap<String, BTreeMap<String, Value>>;

/// Raw, semi-structured financial statement data for a symbol.
///
/// Values are kept as JSON so that missing or malformed upstream fields reach
/// the derivation layer untouched; interpreting them is the caller's job.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFundamentals {
    /// General info: market cap, P/E ratios, yields and returns as decimals
    #[serde(default)]
    pub info: BTreeMap<String, Value>,

    #[serde(default)]
    pub income_statement: LineItems,

    #[serde(default)]
    pub balance_sheet: LineItems,

    #[serde(default)]
    pub cashflow: LineItems,
}

impl RawFundamentals {
    /// Look up a general info field.
    pub fn info_value(&self, key: &str) -> Option<&Value> {
        self.info.get(key)
    }

    /// Periods of an income-statement line item.
    pub fn income_item(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.income_statement.get(name)
    }

    /// Periods of a cashflow line item.
    pub fn cashflow_item(&self, name: &str) -> Option<&BTreeMap<String, Value>> {
        self.cashflow.get(name)
    }
}
