//! Price data port trait.
//!
//! The engine only needs an ordered, gapless bar sequence; whether it comes
//! from the synthetic generator or a recorded feed is an adapter concern.

use crate::domain::bar::PriceBar;
use crate::domain::error::SweeptraderError;

pub trait DataPort {
    /// Fetch `count` bars with ordinal times `0..count`.
    fn fetch_bars(&self, count: usize) -> Result<Vec<PriceBar>, SweeptraderError>;
}
