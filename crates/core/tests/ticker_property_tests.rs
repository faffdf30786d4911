//! Property-based tests for ticker normalization.
//!
//! These tests verify that universal properties hold across all valid and
//! invalid inputs, using the `proptest` crate for random test case generation.

use proptest::prelude::*;
use stockeval_core::tickers::{normalize_ticker, InvalidTickerError};

// =============================================================================
// Generators
// =============================================================================

/// Generates a symbol in canonical form: 1-5 letters with an optional suffix.
fn arb_canonical_symbol() -> impl Strategy<Value = String> {
    "[A-Z]{1,5}(\\.[A-Z]{1,2})?"
}

/// Generates a canonical symbol in mixed case with surrounding whitespace.
fn arb_messy_symbol() -> impl Strategy<Value = String> {
    (arb_canonical_symbol(), "[ \t]{0,3}", "[ \t]{0,3}", any::<bool>()).prop_map(
        |(symbol, lead, trail, lower)| {
            let body = if lower { symbol.to_lowercase() } else { symbol };
            format!("{lead}{body}{trail}")
        },
    )
}

/// Generates symbols that contain at least one digit.
fn arb_with_digit() -> impl Strategy<Value = String> {
    ("[A-Z]{0,3}", "[0-9]", "[A-Z]{0,3}").prop_map(|(a, d, b)| format!("{a}{d}{b}"))
}

/// Generates symbols with a punctuation character other than a dot.
fn arb_with_punctuation() -> impl Strategy<Value = String> {
    ("[A-Z]{0,3}", "[-_/$#@!,:;+*]", "[A-Z]{0,3}").prop_map(|(a, p, b)| format!("{a}{p}{b}"))
}

/// Generates symbols whose leading run of letters is longer than five.
fn arb_too_long() -> impl Strategy<Value = String> {
    ("[A-Z]{6,12}", proptest::option::of("\\.[A-Z]{1,2}"))
        .prop_map(|(head, suffix)| format!("{head}{}", suffix.unwrap_or_default()))
}

/// Generates symbols with more than one dot.
fn arb_multiple_dots() -> impl Strategy<Value = String> {
    ("[A-Z]{1,3}", proptest::collection::vec("\\.[A-Z]{0,2}", 2..4))
        .prop_map(|(head, parts)| format!("{head}{}", parts.concat()))
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Normalizing an already normalized symbol returns it unchanged.
    #[test]
    fn prop_normalization_is_idempotent(raw in arb_messy_symbol()) {
        let once = normalize_ticker(&raw).unwrap();
        let twice = normalize_ticker(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Canonical symbols are accepted as they are.
    #[test]
    fn prop_canonical_symbols_pass_through(symbol in arb_canonical_symbol()) {
        let normalized = normalize_ticker(&symbol).unwrap();
        prop_assert_eq!(normalized.as_str(), symbol.as_str());
    }

    /// Output never carries whitespace or lowercase characters.
    #[test]
    fn prop_output_is_trimmed_uppercase(raw in arb_messy_symbol()) {
        let normalized = normalize_ticker(&raw).unwrap();
        prop_assert!(normalized
            .as_str()
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '.'));
    }

    #[test]
    fn prop_digits_are_rejected(raw in arb_with_digit()) {
        prop_assert!(matches!(normalize_ticker(&raw), Err(InvalidTickerError::Format(_))));
    }

    #[test]
    fn prop_punctuation_is_rejected(raw in arb_with_punctuation()) {
        prop_assert!(matches!(normalize_ticker(&raw), Err(InvalidTickerError::Format(_))));
    }

    #[test]
    fn prop_long_symbols_are_rejected(raw in arb_too_long()) {
        prop_assert!(matches!(normalize_ticker(&raw), Err(InvalidTickerError::Format(_))));
    }

    #[test]
    fn prop_multiple_dots_are_rejected(raw in arb_multiple_dots()) {
        prop_assert!(matches!(normalize_ticker(&raw), Err(InvalidTickerError::Format(_))));
    }

    /// Whitespace-only input is reported as empty, not as a format error.
    #[test]
    fn prop_blank_input_is_empty(raw in "[ \t\n]{0,8}") {
        prop_assert_eq!(normalize_ticker(&raw), Err(InvalidTickerError::Empty));
    }
}
