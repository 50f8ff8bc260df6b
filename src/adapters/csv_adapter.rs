//! CSV bar data adapter.
//!
//! Reads a recorded price series from a `time,open,high,low,close` file, the
//! drop-in replacement for the synthetic generator when real data is on hand.
//! Also writes series back out in the same shape (the `generate` subcommand).

use crate::domain::bar::PriceBar;
use crate::domain::error::SweeptraderError;
use crate::ports::data_port::DataPort;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CsvBarAdapter {
    path: PathBuf,
}

impl CsvBarAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataPort for CsvBarAdapter {
    fn fetch_bars(&self, count: usize) -> Result<Vec<PriceBar>, SweeptraderError> {
        let content = fs::read_to_string(&self.path).map_err(|e| SweeptraderError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| SweeptraderError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let field = |idx: usize, name: &str| -> Result<f64, SweeptraderError> {
                record
                    .get(idx)
                    .ok_or_else(|| SweeptraderError::Data {
                        reason: format!("missing {} column", name),
                    })?
                    .parse()
                    .map_err(|e| SweeptraderError::Data {
                        reason: format!("invalid {} value: {}", name, e),
                    })
            };

            let time: usize = record
                .get(0)
                .ok_or_else(|| SweeptraderError::Data {
                    reason: "missing time column".into(),
                })?
                .parse()
                .map_err(|e| SweeptraderError::Data {
                    reason: format!("invalid time value: {}", e),
                })?;

            bars.push(PriceBar {
                time,
                open: field(1, "open")?,
                high: field(2, "high")?,
                low: field(3, "low")?,
                close: field(4, "close")?,
            });
        }

        bars.sort_by_key(|b| b.time);

        if bars.len() < count {
            return Err(SweeptraderError::InsufficientData {
                bars: bars.len(),
                minimum: count,
            });
        }
        bars.truncate(count);
        Ok(bars)
    }
}

/// Write a series as `time,open,high,low,close` rows.
pub fn write_bars(path: &Path, bars: &[PriceBar]) -> Result<(), SweeptraderError> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| SweeptraderError::Data {
        reason: format!("failed to create {}: {}", path.display(), e),
    })?;

    wtr.write_record(["time", "open", "high", "low", "close"])
        .map_err(|e| SweeptraderError::Data {
            reason: format!("CSV write error: {}", e),
        })?;

    for bar in bars {
        wtr.write_record([
            bar.time.to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
        ])
        .map_err(|e| SweeptraderError::Data {
            reason: format!("CSV write error: {}", e),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
