//! Exit resolution.
//!
//! Given the strategy's exit-target rules, an entry point, and a direction,
//! determines the bar at which the trade closes and at what price. Resolution
//! is total: whatever the target text says, every trade eventually closes at
//! its time stop or its stop-loss.
//!
//! # Semantics
//!
//! - Hard time stop [`MAX_HOLD_BARS`] bars after entry, clamped to series end.
//! - Stop-loss is direction-relative: 2% below entry for buys, 2% above for
//!   sells.
//! - The only recognized target is "draw on liquidity" / "recent low". For
//!   sell trades it aims at the lowest low of the pre-entry lookback window
//!   and walks forward bar by bar; within each bar the target hit is checked
//!   before the stop hit.

use crate::domain::bar::{lowest_low, PriceBar};
use crate::domain::condition::LOOKBACK_BARS;
use crate::domain::trade::Direction;

/// Hard time stop, in bars after entry.
pub const MAX_HOLD_BARS: usize = 10;

/// Stop-loss distance from entry, as a fraction of entry price.
pub const STOP_LOSS_FRACTION: f64 = 0.02;

/// Exit-target vocabulary the resolver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTarget {
    /// Aim at the lowest low of the pre-entry window (sell trades only).
    DrawOnLiquidity,
    Unrecognized,
}

impl ExitTarget {
    pub fn classify(target_text: &str) -> Self {
        let text = target_text.to_lowercase();
        if text.contains("draw on liquidity") || text.contains("recent low") {
            ExitTarget::DrawOnLiquidity
        } else {
            ExitTarget::Unrecognized
        }
    }
}

/// Where and when a trade closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeExit {
    pub exit_price: f64,
    pub exit_time: usize,
}

/// Stop-loss price for a trade entered at `entry_price`.
pub fn stop_loss_price(entry_price: f64, direction: Direction) -> f64 {
    match direction {
        Direction::Buy => entry_price * (1.0 - STOP_LOSS_FRACTION),
        Direction::Sell => entry_price * (1.0 + STOP_LOSS_FRACTION),
    }
}

/// Resolve the exit for a trade entered at `entry_index`.
///
/// Scans `exit_targets` in order; the first recognized target that applies to
/// this direction drives the forward scan. Falls back to closing at the
/// time-stop bar at the stop-loss price.
pub fn resolve_exit(
    exit_targets: &[String],
    series: &[PriceBar],
    entry_index: usize,
    entry_price: f64,
    direction: Direction,
) -> TradeExit {
    let time_stop = (entry_index + MAX_HOLD_BARS).min(series.len() - 1);
    let stop_price = stop_loss_price(entry_price, direction);

    for target in exit_targets {
        if ExitTarget::classify(target) != ExitTarget::DrawOnLiquidity {
            continue;
        }
        if direction != Direction::Sell {
            continue;
        }

        let window = &series[entry_index.saturating_sub(LOOKBACK_BARS)..entry_index];
        let target_low = lowest_low(window);

        for bar in &series[entry_index + 1..=time_stop] {
            if bar.low <= target_low {
                return TradeExit {
                    exit_price: target_low,
                    exit_time: bar.time,
                };
            }
            if bar.high >= stop_price {
                return TradeExit {
                    exit_price: stop_price,
                    exit_time: bar.time,
                };
            }
        }
    }

    TradeExit {
        exit_price: stop_price,
        exit_time: series[time_stop].time,
    }
}
