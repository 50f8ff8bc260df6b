#![allow(dead_code)]

use sweeptrader::domain::bar::PriceBar;
use sweeptrader::domain::error::SweeptraderError;
use sweeptrader::domain::strategy::StructuredStrategy;
use sweeptrader::ports::data_port::DataPort;

/// Data port serving a fixed in-memory series.
pub struct FixedDataPort {
    pub bars: Vec<PriceBar>,
}

impl FixedDataPort {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }
}

impl DataPort for FixedDataPort {
    fn fetch_bars(&self, count: usize) -> Result<Vec<PriceBar>, SweeptraderError> {
        if self.bars.len() < count {
            return Err(SweeptraderError::InsufficientData {
                bars: self.bars.len(),
                minimum: count,
            });
        }
        Ok(self.bars[..count].to_vec())
    }
}

pub fn flat_bar(time: usize) -> PriceBar {
    PriceBar {
        time,
        open: 100.0,
        high: 101.0,
        low: 99.0,
        close: 100.0,
    }
}

pub fn flat_series(len: usize) -> Vec<PriceBar> {
    (0..len).map(flat_bar).collect()
}

/// Sweep the highs, confirm with a BOS, target prior liquidity.
///
/// The exit target must say "draw on liquidity" in the singular; the plural
/// "draws on liquidity" misses the keyword and falls back to the time stop.
pub fn sweep_strategy() -> StructuredStrategy {
    StructuredStrategy {
        name: "Session Sweep Fade".into(),
        description: "Short sweeps of session highs into prior liquidity".into(),
        entry_conditions: vec!["Liquidity sweep of 1hr, 4hr, or session highs".into()],
        confirmation_signals: vec!["Confirmation: BOS".into()],
        exit_targets: vec!["Target the previous draw on liquidity".into()],
    }
}

pub fn strategy_with(
    entry: &[&str],
    confirmation: &[&str],
    exits: &[&str],
) -> StructuredStrategy {
    StructuredStrategy {
        name: "Test".into(),
        description: String::new(),
        entry_conditions: entry.iter().map(|s| s.to_string()).collect(),
        confirmation_signals: confirmation.iter().map(|s| s.to_string()).collect(),
        exit_targets: exits.iter().map(|s| s.to_string()).collect(),
    }
}
