//! Report output port trait.

use crate::domain::error::SweeptraderError;
use crate::domain::stats::BacktestResults;
use crate::domain::strategy::StructuredStrategy;

/// Port for rendering backtest results.
pub trait ReportPort {
    fn write(
        &self,
        results: &BacktestResults,
        strategy: &StructuredStrategy,
        output_path: &str,
    ) -> Result<(), SweeptraderError>;
}
