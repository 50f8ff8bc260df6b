//! Price bar representation.
//!
//! `time` is an ordinal step index, not a calendar date: one bar per discrete
//! step, series ordered ascending with no gaps.

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub time: usize,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceBar {
    /// Candle body midpoint, (open + close) / 2.
    pub fn midpoint(&self) -> f64 {
        (self.open + self.close) / 2.0
    }

    /// Full candle range, high - low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }
}

/// Maximum `high` over a slice of bars. Returns NEG_INFINITY for an empty slice.
pub fn highest_high(bars: &[PriceBar]) -> f64 {
    bars.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max)
}

/// Minimum `low` over a slice of bars. Returns INFINITY for an empty slice.
pub fn lowest_low(bars: &[PriceBar]) -> f64 {
    bars.iter().map(|b| b.low).fold(f64::INFINITY, f64::min)
}
