//! Aggregate performance statistics.
//!
//! Results are recomputed wholesale from the closed trade list each run; there
//! is no incremental update path.

use crate::domain::trade::Trade;

#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResults {
    pub total_trades: usize,
    /// Percentage of trades with positive profit, in [0, 100].
    pub win_rate: f64,
    pub total_pnl: f64,
    pub average_pnl: f64,
    /// Average profit over the population standard deviation of profit.
    pub sharpe_ratio: f64,
    pub trades: Vec<Trade>,
}

impl BacktestResults {
    pub fn empty() -> Self {
        BacktestResults {
            total_trades: 0,
            win_rate: 0.0,
            total_pnl: 0.0,
            average_pnl: 0.0,
            sharpe_ratio: 0.0,
            trades: Vec::new(),
        }
    }
}

/// Reduce a closed trade list into summary statistics.
///
/// An empty list is not an error: every numeric field is zero.
pub fn summarize(trades: Vec<Trade>) -> BacktestResults {
    let total_trades = trades.len();
    if total_trades == 0 {
        return BacktestResults::empty();
    }

    let winners = trades.iter().filter(|t| t.is_winner()).count();
    let win_rate = 100.0 * winners as f64 / total_trades as f64;

    let total_pnl: f64 = trades.iter().map(|t| t.profit).sum();
    let average_pnl = total_pnl / total_trades as f64;

    // Population standard deviation, divisor n.
    let variance = trades
        .iter()
        .map(|t| (t.profit - average_pnl).powi(2))
        .sum::<f64>()
        / total_trades as f64;
    let stddev = variance.sqrt();

    let sharpe_ratio = if stddev > 0.0 {
        average_pnl / stddev
    } else {
        0.0
    };

    BacktestResults {
        total_trades,
        win_rate,
        total_pnl,
        average_pnl,
        sharpe_ratio,
        trades,
    }
}
