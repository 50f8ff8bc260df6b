//! Strategy input port trait.
//!
//! The structuring collaborator (an AI call in the full system) turns strategy
//! prose into ordered rule lists. This side of the boundary only loads its
//! already-structured output; a failure here is surfaced to the user and the
//! engine is never invoked with a partially-structured strategy.

use crate::domain::error::SweeptraderError;
use crate::domain::strategy::StructuredStrategy;

pub trait StrategyPort {
    fn load(&self) -> Result<StructuredStrategy, SweeptraderError>;
}
