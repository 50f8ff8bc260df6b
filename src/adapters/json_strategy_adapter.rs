//! JSON strategy document adapter.
//!
//! Loads the structured strategy the external structuring collaborator
//! produced. Applies the same basic validation the collaborator contract
//! promises downstream: a non-empty strategy name and a present
//! entry-conditions array (the latter enforced by the document shape).

use crate::domain::error::SweeptraderError;
use crate::domain::strategy::StructuredStrategy;
use crate::ports::strategy_port::StrategyPort;
use std::fs;
use std::path::{Path, PathBuf};

pub struct JsonStrategyAdapter {
    path: PathBuf,
}

impl JsonStrategyAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse and validate a strategy document.
    pub fn parse(content: &str, source: &str) -> Result<StructuredStrategy, SweeptraderError> {
        let strategy: StructuredStrategy =
            serde_json::from_str(content).map_err(|e| SweeptraderError::StrategyParse {
                file: source.to_string(),
                reason: e.to_string(),
            })?;
        validate(&strategy)?;
        Ok(strategy)
    }
}

fn validate(strategy: &StructuredStrategy) -> Result<(), SweeptraderError> {
    if strategy.name.trim().is_empty() {
        return Err(SweeptraderError::StrategyInvalid {
            reason: "strategyName is empty".into(),
        });
    }
    Ok(())
}

impl StrategyPort for JsonStrategyAdapter {
    fn load(&self) -> Result<StructuredStrategy, SweeptraderError> {
        let content = read_file(&self.path)?;
        Self::parse(&content, &self.path.display().to_string())
    }
}

fn read_file(path: &Path) -> Result<String, SweeptraderError> {
    fs::read_to_string(path).map_err(|e| SweeptraderError::StrategyParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}
