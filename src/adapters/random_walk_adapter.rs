//! Synthetic price series adapter.
//!
//! Stands in for a real market-data feed: a random walk with a slight negative
//! drift plus a low-frequency sinusoidal trend, so sweep/BOS setups actually
//! occur in the series. Each bar opens at the previous close; high and low are
//! the body extremes widened by independent positive jitter.
//!
//! Passing a seed makes the series reproducible; without one each call draws
//! from entropy and differs run to run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

use crate::domain::bar::PriceBar;
use crate::domain::error::SweeptraderError;
use crate::ports::data_port::DataPort;

pub const START_PRICE: f64 = 100.0;

/// Sinusoid period divisor: the cyclical term completes a cycle every
/// 2π × 20 steps.
const TREND_PERIOD: f64 = 20.0;

pub struct RandomWalkAdapter {
    rng: RefCell<StdRng>,
}

impl RandomWalkAdapter {
    /// Seeded source: identical seeds produce identical series.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Entropy-backed source; not reproducible across calls.
    pub fn from_entropy() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }
}

impl DataPort for RandomWalkAdapter {
    fn fetch_bars(&self, count: usize) -> Result<Vec<PriceBar>, SweeptraderError> {
        let mut rng = self.rng.borrow_mut();
        let mut bars = Vec::with_capacity(count);
        let mut price = START_PRICE;

        for i in 0..count {
            let drift: f64 = (rng.r#gen::<f64>() - 0.48) * 5.0;
            let cycle = (i as f64 / TREND_PERIOD).sin() * 2.0;
            let open = price;
            let close = open + drift + cycle;
            let high = open.max(close) + rng.r#gen::<f64>() * 2.0;
            let low = open.min(close) - rng.r#gen::<f64>() * 2.0;

            bars.push(PriceBar {
                time: i,
                open,
                high,
                low,
                close,
            });
            price = close;
        }

        Ok(bars)
    }
}
