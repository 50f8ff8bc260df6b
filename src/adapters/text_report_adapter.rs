//! Plain-text report adapter.
//!
//! Renders the summary statistics and the per-trade markers the display layer
//! would chart: entry/exit time and price, direction, and profit per trade.

use crate::domain::error::SweeptraderError;
use crate::domain::stats::BacktestResults;
use crate::domain::strategy::StructuredStrategy;
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;
use std::fs;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(results: &BacktestResults, strategy: &StructuredStrategy) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Strategy: {}", strategy.name);
        if !strategy.description.is_empty() {
            let _ = writeln!(out, "  {}", strategy.description);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Total trades:  {}", results.total_trades);
        let _ = writeln!(out, "Win rate:      {:.2}%", results.win_rate);
        let _ = writeln!(out, "Total PnL:     {:.4}", results.total_pnl);
        let _ = writeln!(out, "Average PnL:   {:.4}", results.average_pnl);
        let _ = writeln!(out, "Sharpe ratio:  {:.4}", results.sharpe_ratio);

        if !results.trades.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{:>5} {:>10} {:>6} {:>10} {:>5} {:>10}",
                "entry", "price", "exit", "price", "dir", "profit");
            for trade in &results.trades {
                let _ = writeln!(
                    out,
                    "{:>5} {:>10.4} {:>6} {:>10.4} {:>5} {:>10.4}",
                    trade.entry_time,
                    trade.entry_price,
                    trade.exit_time,
                    trade.exit_price,
                    trade.direction.as_str(),
                    trade.profit
                );
            }
        }

        out
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        results: &BacktestResults,
        strategy: &StructuredStrategy,
        output_path: &str,
    ) -> Result<(), SweeptraderError> {
        fs::write(output_path, Self::render(results, strategy))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stats::summarize;
    use crate::domain::trade::{Direction, Trade};
    use tempfile::TempDir;

    fn sample_strategy() -> StructuredStrategy {
        StructuredStrategy {
            name: "Sweep Fade".into(),
            description: "Short sweeps of recent highs".into(),
            entry_conditions: vec!["Liquidity sweep of highs".into()],
            confirmation_signals: vec![],
            exit_targets: vec!["Draw on liquidity".into()],
        }
    }

    fn sample_results() -> BacktestResults {
        summarize(vec![
            Trade {
                entry_time: 15,
                entry_price: 100.0,
                exit_time: 18,
                exit_price: 95.0,
                profit: 5.0,
                direction: Direction::Sell,
            },
            Trade {
                entry_time: 30,
                entry_price: 101.0,
                exit_time: 40,
                exit_price: 103.02,
                profit: -2.02,
                direction: Direction::Sell,
            },
        ])
    }

    #[test]
    fn render_includes_summary_lines() {
        let text = TextReportAdapter::render(&sample_results(), &sample_strategy());
        assert!(text.contains("Strategy: Sweep Fade"));
        assert!(text.contains("Total trades:  2"));
        assert!(text.contains("Win rate:      50.00%"));
        assert!(text.contains("Sharpe ratio:"));
    }

    #[test]
    fn render_lists_trades() {
        let text = TextReportAdapter::render(&sample_results(), &sample_strategy());
        assert!(text.contains("sell"));
        assert!(text.contains("95.0000"));
    }

    #[test]
    fn render_empty_results_has_no_trade_table() {
        let text = TextReportAdapter::render(&BacktestResults::empty(), &sample_strategy());
        assert!(text.contains("Total trades:  0"));
        assert!(!text.contains("entry"));
    }

    #[test]
    fn write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");

        TextReportAdapter::new()
            .write(
                &sample_results(),
                &sample_strategy(),
                path.to_str().unwrap(),
            )
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Sweep Fade"));
    }
}
