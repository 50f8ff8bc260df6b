//! Core domain types and logic.

pub mod bar;
pub mod condition;
pub mod engine;
pub mod error;
pub mod exit;
pub mod stats;
pub mod strategy;
pub mod trade;
