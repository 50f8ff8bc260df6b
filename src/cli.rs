//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::{self, CsvBarAdapter};
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_strategy_adapter::JsonStrategyAdapter;
use crate::adapters::random_walk_adapter::RandomWalkAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::bar::PriceBar;
use crate::domain::engine;
use crate::domain::error::SweeptraderError;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;
use crate::ports::strategy_port::StrategyPort;

/// Series length when neither the CLI nor the config specifies one.
pub const DEFAULT_BARS: usize = 200;

#[derive(Parser, Debug)]
#[command(name = "sweeptrader", about = "Rule-based trading strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest over a synthetic or recorded price series
    Backtest {
        /// Structured strategy document (JSON)
        #[arg(short, long)]
        strategy: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Series length override
        #[arg(long)]
        bars: Option<usize>,
        /// RNG seed for a reproducible synthetic series
        #[arg(long)]
        seed: Option<u64>,
        /// Recorded series (CSV) instead of the synthetic generator
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Validate a strategy document
    Validate {
        #[arg(short, long)]
        strategy: PathBuf,
    },
    /// Generate a synthetic price series to CSV
    Generate {
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_BARS)]
        bars: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            strategy,
            config,
            output,
            bars,
            seed,
            data,
        } => run_backtest(&strategy, config.as_ref(), output.as_ref(), bars, seed, data),
        Command::Validate { strategy } => run_validate(&strategy),
        Command::Generate { output, bars, seed } => run_generate(&output, bars, seed),
    }
}

/// Effective run parameters after merging CLI overrides over the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub bars: usize,
    pub seed: Option<u64>,
    pub csv_path: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

pub fn resolve_settings(
    config: Option<&dyn ConfigPort>,
    bars: Option<usize>,
    seed: Option<u64>,
    data: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<RunSettings, SweeptraderError> {
    let config_bars = config.map(|c| c.get_int("data", "bars", DEFAULT_BARS as i64));
    let bars = match bars {
        Some(n) => n,
        None => match config_bars {
            Some(n) if n <= 0 => {
                return Err(SweeptraderError::ConfigInvalid {
                    section: "data".into(),
                    key: "bars".into(),
                    reason: format!("must be positive, got {n}"),
                });
            }
            Some(n) => n as usize,
            None => DEFAULT_BARS,
        },
    };

    let seed = seed.or_else(|| {
        config.and_then(|c| c.get_string("data", "seed"))
            .and_then(|s| s.parse().ok())
    });

    let csv_path = data.or_else(|| {
        config
            .and_then(|c| c.get_string("data", "csv_path"))
            .map(PathBuf::from)
    });

    let output = output.or_else(|| {
        config
            .and_then(|c| c.get_string("report", "output"))
            .map(PathBuf::from)
    });

    Ok(RunSettings {
        bars,
        seed,
        csv_path,
        output,
    })
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, SweeptraderError> {
    FileConfigAdapter::from_file(path).map_err(|e| SweeptraderError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn fail(err: &SweeptraderError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

fn run_backtest(
    strategy_path: &PathBuf,
    config_path: Option<&PathBuf>,
    output_override: Option<&PathBuf>,
    bars: Option<usize>,
    seed: Option<u64>,
    data: Option<PathBuf>,
) -> ExitCode {
    // Stage 1: config
    let adapter = match config_path {
        Some(path) => {
            eprintln!("Loading config from {}", path.display());
            match load_config(path) {
                Ok(a) => Some(a),
                Err(e) => return fail(&e),
            }
        }
        None => None,
    };

    let settings = match resolve_settings(
        adapter.as_ref().map(|a| a as &dyn ConfigPort),
        bars,
        seed,
        data,
        output_override.cloned(),
    ) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    // Stage 2: strategy
    eprintln!("Loading strategy from {}", strategy_path.display());
    let strategy = match JsonStrategyAdapter::new(strategy_path.clone()).load() {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    eprintln!("Loaded strategy: {}", strategy.name);

    // Stage 3: price series
    let series = match fetch_series(&settings) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };
    eprintln!("Fetched {} bars", series.len());

    // Stage 4: simulate
    let results = engine::run_backtest(&series, &strategy);
    eprintln!(
        "Backtest complete: {} trades, win rate {:.2}%",
        results.total_trades, results.win_rate
    );

    // Stage 5: report
    match settings.output {
        Some(path) => {
            let report = TextReportAdapter::new();
            if let Err(e) = report.write(&results, &strategy, &path.display().to_string()) {
                return fail(&e);
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", TextReportAdapter::render(&results, &strategy)),
    }

    ExitCode::SUCCESS
}

fn fetch_series(settings: &RunSettings) -> Result<Vec<PriceBar>, SweeptraderError> {
    match &settings.csv_path {
        Some(path) => {
            eprintln!("Reading series from {}", path.display());
            CsvBarAdapter::new(path.clone()).fetch_bars(settings.bars)
        }
        None => {
            let generator = match settings.seed {
                Some(seed) => {
                    eprintln!("Generating {} bars (seed {})", settings.bars, seed);
                    RandomWalkAdapter::seeded(seed)
                }
                None => {
                    eprintln!("Generating {} bars (unseeded)", settings.bars);
                    RandomWalkAdapter::from_entropy()
                }
            };
            generator.fetch_bars(settings.bars)
        }
    }
}

fn run_validate(strategy_path: &PathBuf) -> ExitCode {
    match JsonStrategyAdapter::new(strategy_path.clone()).load() {
        Ok(strategy) => {
            println!("Strategy '{}' is valid", strategy.name);
            println!("  entry conditions:     {}", strategy.entry_conditions.len());
            println!("  confirmation signals: {}", strategy.confirmation_signals.len());
            println!("  exit targets:         {}", strategy.exit_targets.len());
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn run_generate(output: &PathBuf, bars: usize, seed: Option<u64>) -> ExitCode {
    let generator = match seed {
        Some(seed) => RandomWalkAdapter::seeded(seed),
        None => RandomWalkAdapter::from_entropy(),
    };

    let series = match generator.fetch_bars(bars) {
        Ok(s) => s,
        Err(e) => return fail(&e),
    };

    if let Err(e) = csv_adapter::write_bars(output, &series) {
        return fail(&e);
    }

    eprintln!("Wrote {} bars to {}", series.len(), output.display());
    ExitCode::SUCCESS
}
