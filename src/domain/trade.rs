//! Closed trade record and direction.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Buy,
    Sell,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Buy => "buy",
            Direction::Sell => "sell",
        }
    }

    /// Signed profit for a round trip in this direction.
    pub fn profit(self, entry_price: f64, exit_price: f64) -> f64 {
        match self {
            Direction::Buy => exit_price - entry_price,
            Direction::Sell => entry_price - exit_price,
        }
    }
}

/// A completed trade. Immutable once the exit resolver returns its close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    pub entry_time: usize,
    pub entry_price: f64,
    pub exit_time: usize,
    pub exit_price: f64,
    pub profit: f64,
    pub direction: Direction,
}

impl Trade {
    pub fn is_winner(&self) -> bool {
        self.profit > 0.0
    }

    /// Bars held, exit time minus entry time.
    pub fn duration(&self) -> usize {
        self.exit_time.saturating_sub(self.entry_time)
    }
}
