//! Free-text rule classification and evaluation.
//!
//! Rule text is loosely-specified natural language ("Liquidity sweep of 1hr
//! highs", "Confirmation: BOS"). Classification maps each string onto a closed
//! set of computable predicates via case-insensitive keyword matching; this is
//! an intentional, lossy interpretation layer, not a parser. Anything outside
//! the recognized vocabulary becomes [`Condition::Unrecognized`], which never
//! evaluates true, so unknown rules can never gate a trade open.
//!
//! # Evaluation Semantics
//!
//! Every predicate looks at the current bar against a window of the
//! [`LOOKBACK_BARS`] bars strictly preceding it. With fewer than
//! [`LOOKBACK_BARS`] prior bars the answer is `false`; evaluation never fails.

use crate::domain::bar::{highest_high, lowest_low, PriceBar};

/// Window of prior bars a predicate compares the current bar against.
pub const LOOKBACK_BARS: usize = 10;

/// The closed set of predicates the evaluator understands.
///
/// New vocabulary is added by extending this enum and its arm in
/// [`Condition::evaluate`], not by growing an ad hoc string-matching chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Current high exceeds the window's highest high.
    SweepOfHighs,
    /// Current low undercuts the window's lowest low.
    SweepOfLows,
    /// Current close exceeds the window's highest high.
    BreakOfStructure,
    /// Vocabulary with no implemented detector (iFVG, SMT, 79% extension, ...).
    Unrecognized,
}

impl Condition {
    /// Classify one free-text rule into a predicate.
    pub fn classify(rule_text: &str) -> Self {
        let text = rule_text.to_lowercase();

        if text.contains("liquidity sweep") {
            if text.contains("high") {
                return Condition::SweepOfHighs;
            }
            if text.contains("low") {
                return Condition::SweepOfLows;
            }
        }

        if text.contains("bos") || text.contains("break of structure") {
            return Condition::BreakOfStructure;
        }

        Condition::Unrecognized
    }

    /// Test this predicate at `index` in `series`.
    pub fn evaluate(self, series: &[PriceBar], index: usize) -> bool {
        if index < LOOKBACK_BARS || index >= series.len() {
            return false;
        }

        let window = &series[index - LOOKBACK_BARS..index];
        let current = &series[index];

        match self {
            Condition::SweepOfHighs => current.high > highest_high(window),
            Condition::SweepOfLows => current.low < lowest_low(window),
            Condition::BreakOfStructure => current.close > highest_high(window),
            Condition::Unrecognized => false,
        }
    }
}

/// Classify and test one rule string at `index`.
pub fn evaluate_rule(rule_text: &str, series: &[PriceBar], index: usize) -> bool {
    Condition::classify(rule_text).evaluate(series, index)
}

/// A rule set holds only if every rule in it holds (logical AND).
///
/// An empty set is vacuously satisfied, matching `every` over an empty list.
pub fn all_rules_met(rules: &[String], series: &[PriceBar], index: usize) -> bool {
    rules.iter().all(|rule| evaluate_rule(rule, series, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Eleven flat bars; callers perturb bar 10 (the "current" bar).
    fn flat_series() -> Vec<PriceBar> {
        (0..11)
            .map(|i| PriceBar {
                time: i,
                open: 100.0,
                high: 101.0,
                low: 99.0,
                close: 100.0,
            })
            .collect()
    }

    #[test]
    fn classify_sweep_of_highs() {
        assert_eq!(
            Condition::classify("Liquidity sweep of 1hr highs"),
            Condition::SweepOfHighs
        );
        assert_eq!(
            Condition::classify("LIQUIDITY SWEEP of session HIGHS"),
            Condition::SweepOfHighs
        );
    }

    #[test]
    fn classify_sweep_of_lows() {
        assert_eq!(
            Condition::classify("Liquidity sweep of the overnight lows"),
            Condition::SweepOfLows
        );
    }

    #[test]
    fn classify_break_of_structure() {
        assert_eq!(Condition::classify("Confirmation: BOS"), Condition::BreakOfStructure);
        assert_eq!(
            Condition::classify("wait for a break of structure"),
            Condition::BreakOfStructure
        );
    }

    #[test]
    fn classify_unrecognized_vocabulary() {
        for text in ["iFVG confirmation", "SMT divergence", "79% extension", "EQ/FVG"] {
            assert_eq!(Condition::classify(text), Condition::Unrecognized);
        }
    }

    #[test]
    fn sweep_without_side_is_unrecognized() {
        assert_eq!(Condition::classify("liquidity sweep"), Condition::Unrecognized);
    }

    #[test]
    fn sweep_of_highs_fires_on_breakout() {
        let mut series = flat_series();
        series[10].high = 102.5;
        assert!(evaluate_rule("liquidity sweep of highs", &series, 10));
    }

    #[test]
    fn sweep_of_highs_false_when_current_is_lowest() {
        let mut series = flat_series();
        series[10].high = 98.0;
        series[10].low = 95.0;
        series[10].close = 96.0;
        assert!(!evaluate_rule("liquidity sweep of highs", &series, 10));
    }

    #[test]
    fn sweep_of_lows_fires_on_undercut() {
        let mut series = flat_series();
        series[10].low = 97.0;
        assert!(evaluate_rule("liquidity sweep of lows", &series, 10));
    }

    #[test]
    fn bos_requires_close_beyond_window_high() {
        let mut series = flat_series();
        series[10].close = 101.5;
        series[10].high = 102.0;
        assert!(evaluate_rule("BOS", &series, 10));

        // A wick above the window high without the close is not a BOS.
        let mut series = flat_series();
        series[10].high = 102.0;
        series[10].close = 100.5;
        assert!(!evaluate_rule("BOS", &series, 10));
    }

    #[test]
    fn short_lookback_evaluates_false() {
        let series = flat_series();
        for index in 0..LOOKBACK_BARS {
            assert!(!evaluate_rule("liquidity sweep of highs", &series, index));
        }
    }

    #[test]
    fn out_of_range_index_evaluates_false() {
        let series = flat_series();
        assert!(!evaluate_rule("BOS", &series, series.len()));
        assert!(!evaluate_rule("BOS", &series, 500));
    }

    #[test]
    fn unrecognized_never_true() {
        let mut series = flat_series();
        series[10].high = 200.0;
        series[10].close = 200.0;
        series[10].low = 1.0;
        assert!(!evaluate_rule("iFVG confirmation", &series, 10));
    }

    #[test]
    fn all_rules_met_is_logical_and() {
        let mut series = flat_series();
        series[10].high = 102.5;

        let sweep = "liquidity sweep of highs".to_string();
        let unknown = "SMT divergence".to_string();

        assert!(all_rules_met(&[sweep.clone()], &series, 10));
        assert!(!all_rules_met(&[sweep, unknown], &series, 10));
    }

    #[test]
    fn empty_rule_set_is_vacuously_met() {
        let series = flat_series();
        assert!(all_rules_met(&[], &series, 10));
    }
}
