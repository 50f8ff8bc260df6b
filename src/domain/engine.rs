//! Backtest engine and scan loop.
//!
//! Drives the simulation: walks the price series, gates entries through the
//! condition evaluator, delegates each close to the exit resolver, and reduces
//! the closed trades into [`BacktestResults`]. A run is a pure function of the
//! series and the strategy; nothing is shared between runs and nothing can
//! fail.

use crate::domain::bar::PriceBar;
use crate::domain::condition::{all_rules_met, LOOKBACK_BARS};
use crate::domain::exit::{resolve_exit, MAX_HOLD_BARS};
use crate::domain::stats::{summarize, BacktestResults};
use crate::domain::strategy::StructuredStrategy;
use crate::domain::trade::{Direction, Trade};

/// Direction for a freshly opened trade.
///
/// Every fired setup is treated as a short: the recognized vocabulary is
/// sweep-the-highs-and-fade. A real engine would infer long/short from the
/// rule language; keeping the choice behind this seam lets that land without
/// touching the scan loop.
fn trade_direction(_strategy: &StructuredStrategy) -> Direction {
    Direction::Sell
}

/// Run the strategy over the series.
///
/// Scans indices `LOOKBACK_BARS..len - MAX_HOLD_BARS`, leaving margin for the
/// lookback window behind and the exit search ahead; series shorter than both
/// margins produce the all-zero result. At each bar every entry condition and
/// every confirmation signal must hold (logical AND) for a trade to open at
/// that bar's close. After a trade the cursor jumps to its exit bar, so no two
/// trades overlap in time.
pub fn run_backtest(series: &[PriceBar], strategy: &StructuredStrategy) -> BacktestResults {
    let mut trades: Vec<Trade> = Vec::new();
    let scan_end = series.len().saturating_sub(MAX_HOLD_BARS);

    let mut i = LOOKBACK_BARS;
    while i < scan_end {
        if all_rules_met(&strategy.entry_conditions, series, i)
            && all_rules_met(&strategy.confirmation_signals, series, i)
        {
            let entry_price = series[i].close;
            let entry_time = series[i].time;
            let direction = trade_direction(strategy);

            let exit = resolve_exit(&strategy.exit_targets, series, i, entry_price, direction);
            let profit = direction.profit(entry_price, exit.exit_price);

            trades.push(Trade {
                entry_time,
                entry_price,
                exit_time: exit.exit_time,
                exit_price: exit.exit_price,
                profit,
                direction,
            });

            // Skip past the open trade's duration before searching again.
            // Bar time equals bar index, so the exit time is a valid cursor.
            i = exit.exit_time;
        }
        i += 1;
    }

    summarize(trades)
}
