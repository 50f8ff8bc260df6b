//! sweeptrader — rule-based trading-strategy backtester.
//!
//! Takes a strategy expressed as structured natural-language rule lists
//! (entry conditions, confirmation signals, exit targets) plus a price series
//! and simulates trade execution into aggregate performance statistics.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
