//! Numeric helpers for fundamentals derivation.
//!
//! Upstream statement data is loosely typed: values may be numbers, numeric
//! strings, nulls or garbage. Every helper here is total. Anything that
//! cannot be turned into a finite number becomes `None`.

use std::collections::BTreeMap;

use serde_json::Value;

/// Coerce a JSON value into a finite `f64`.
///
/// Numbers and numeric strings are accepted. Booleans, nulls, containers and
/// non-finite results (`"NaN"`, `"inf"`) are not.
pub fn try_coerce_float(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Scale a decimal fraction (`0.01`) to a percentage (`1.0`).
pub fn percent_from_decimal(value: Option<&Value>) -> Option<f64> {
    try_coerce_float(value).map(|v| v * 100.0)
}

/// `numerator / denominator * 100`, or `None` when either side is missing
/// or the denominator is zero.
pub fn ratio_percent(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return None;
    }
    let ratio = numerator / denominator * 100.0;
    ratio.is_finite().then_some(ratio)
}

/// Value of the most recent period, i.e. the greatest period label.
pub fn latest_numeric(periods: Option<&BTreeMap<String, Value>>) -> Option<f64> {
    let (_, value) = periods?.iter().next_back()?;
    try_coerce_float(Some(value))
}

/// Compound growth between the earliest and latest period, in percent.
///
/// Periods count as unit steps: the span is the number of periods minus one,
/// clamped to `1..=max_years`. A single period compares with itself.
pub fn cagr_percent(periods: Option<&BTreeMap<String, Value>>, max_years: usize) -> Option<f64> {
    let periods = periods?;
    let (_, first) = periods.iter().next()?;
    let (_, last) = periods.iter().next_back()?;

    let start = try_coerce_float(Some(first))?;
    let end = try_coerce_float(Some(last))?;
    if start <= 0.0 || end <= 0.0 {
        return None;
    }

    let span = periods.len().saturating_sub(1).min(max_years).max(1);
    let growth = ((end / start).powf(1.0 / span as f64) - 1.0) * 100.0;
    growth.is_finite().then_some(growth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn periods(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_try_coerce_float() {
        assert_eq!(try_coerce_float(Some(&json!(25))), Some(25.0));
        assert_eq!(try_coerce_float(Some(&json!(1.5))), Some(1.5));
        assert_eq!(try_coerce_float(Some(&json!(" 42.5 "))), Some(42.5));
        assert_eq!(try_coerce_float(Some(&json!("-3"))), Some(-3.0));
    }

    #[test]
    fn test_try_coerce_float_rejects_non_numeric() {
        assert_eq!(try_coerce_float(None), None);
        assert_eq!(try_coerce_float(Some(&Value::Null)), None);
        assert_eq!(try_coerce_float(Some(&json!(true))), None);
        assert_eq!(try_coerce_float(Some(&json!("n/a"))), None);
        assert_eq!(try_coerce_float(Some(&json!("NaN"))), None);
        assert_eq!(try_coerce_float(Some(&json!("inf"))), None);
        assert_eq!(try_coerce_float(Some(&json!([1.0]))), None);
        assert_eq!(try_coerce_float(Some(&json!({"raw": 1.0}))), None);
    }

    #[test]
    fn test_percent_from_decimal() {
        let pct = percent_from_decimal(Some(&json!(0.15))).unwrap();
        assert!((pct - 15.0).abs() < 1e-9);
        assert_eq!(percent_from_decimal(Some(&json!("abc"))), None);
    }

    #[test]
    fn test_ratio_percent() {
        let pct = ratio_percent(Some(50.0), Some(1000.0)).unwrap();
        assert!((pct - 5.0).abs() < 1e-9);
        assert_eq!(ratio_percent(Some(50.0), Some(0.0)), None);
        assert_eq!(ratio_percent(None, Some(1000.0)), None);
        assert_eq!(ratio_percent(Some(50.0), None), None);
    }

    #[test]
    fn test_latest_numeric_uses_greatest_label() {
        let data = periods(&[
            ("2022-12-31", json!(10.0)),
            ("2024-12-31", json!(30.0)),
            ("2023-12-31", json!(20.0)),
        ]);
        assert_eq!(latest_numeric(Some(&data)), Some(30.0));
    }

    #[test]
    fn test_latest_numeric_does_not_skip_bad_latest_value() {
        let data = periods(&[("2023", json!(20.0)), ("2024", json!("n/a"))]);
        assert_eq!(latest_numeric(Some(&data)), None);
        assert_eq!(latest_numeric(Some(&BTreeMap::new())), None);
        assert_eq!(latest_numeric(None), None);
    }

    #[test]
    fn test_cagr_two_periods_use_unit_span() {
        let data = periods(&[("2019", json!(100.0)), ("2024", json!(200.0))]);
        let growth = cagr_percent(Some(&data), 5).unwrap();
        assert!((growth - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cagr_span_counts_periods() {
        // Five periods give a span of four.
        let data = periods(&[
            ("2020", json!(100.0)),
            ("2021", json!(110.0)),
            ("2022", json!(120.0)),
            ("2023", json!(130.0)),
            ("2024", json!(146.41)),
        ]);
        let growth = cagr_percent(Some(&data), 5).unwrap();
        assert!((growth - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_cagr_span_is_capped() {
        let data: BTreeMap<String, Value> = (2014..=2024)
            .map(|year| (year.to_string(), json!(100.0 * 2f64.powi(year - 2014))))
            .collect();
        // 2^10 growth over a capped span of 5 periods
        let expected = (1024f64.powf(1.0 / 5.0) - 1.0) * 100.0;
        let growth = cagr_percent(Some(&data), 5).unwrap();
        assert!((growth - expected).abs() < 1e-6);
    }

    #[test]
    fn test_cagr_single_period_is_zero() {
        let data = periods(&[("2024", json!(100.0))]);
        assert_eq!(cagr_percent(Some(&data), 5), Some(0.0));
    }

    #[test]
    fn test_cagr_undefined_inputs() {
        let negative = periods(&[("2019", json!(-100.0)), ("2024", json!(200.0))]);
        assert_eq!(cagr_percent(Some(&negative), 5), None);

        let zero_end = periods(&[("2019", json!(100.0)), ("2024", json!(0.0))]);
        assert_eq!(cagr_percent(Some(&zero_end), 5), None);

        let nan = periods(&[("2019", json!(100.0)), ("2024", json!("NaN"))]);
        assert_eq!(cagr_percent(Some(&nan), 5), None);

        assert_eq!(cagr_percent(Some(&BTreeMap::new()), 5), None);
        assert_eq!(cagr_percent(None, 5), None);
    }
}
