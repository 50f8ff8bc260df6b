//! Error types.
//!
//! The backtesting core itself has no fallible operations: the evaluator and
//! the exit resolver are total and the engine never fails. Errors exist only
//! at the boundary where configuration, strategy documents, price data, and
//! reports touch the filesystem.

/// Top-level error type for sweeptrader.
#[derive(Debug, thiserror::Error)]
pub enum SweeptraderError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("strategy parse error in {file}: {reason}")]
    StrategyParse { file: String, reason: String },

    #[error("invalid strategy: {reason}")]
    StrategyInvalid { reason: String },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("insufficient data: have {bars} bars, need {minimum}")]
    InsufficientData { bars: usize, minimum: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SweeptraderError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            SweeptraderError::Io(_) => 1,
            SweeptraderError::ConfigParse { .. }
            | SweeptraderError::ConfigMissing { .. }
            | SweeptraderError::ConfigInvalid { .. } => 2,
            SweeptraderError::StrategyParse { .. } | SweeptraderError::StrategyInvalid { .. } => 3,
            SweeptraderError::Data { .. } | SweeptraderError::InsufficientData { .. } => 4,
        }
    }
}

impl From<&SweeptraderError> for std::process::ExitCode {
    fn from(err: &SweeptraderError) -> Self {
        std::process::ExitCode::from(err.exit_code())
    }
}
