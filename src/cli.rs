use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dice_knockout::generator::constants::DEFAULT_SQUARE_DEPTH;
use dice_knockout::search::{DEFAULT_FACES, DEFAULT_TARGET_MAX};
use dice_knockout::utils::DEFAULT_TOLERANCE;
use dice_knockout::expression::BinaryOp;
use dice_knockout::{Combination, CombinationSearch, OperatorSet, SearchConfig};
use itertools::Itertools;
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Binary operator selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OperatorArg {
    Add,
    Sub,
    Mul,
    Div,
}

impl OperatorArg {
    pub fn to_binary_op(self) -> BinaryOp {
        match self {
            OperatorArg::Add => BinaryOp::Add,
            OperatorArg::Sub => BinaryOp::Sub,
            OperatorArg::Mul => BinaryOp::Mul,
            OperatorArg::Div => BinaryOp::Div,
        }
    }
}

/// Dice Knockout - find dice whose faces can make every number up to a target
#[derive(Parser, Debug)]
#[command(name = "dice-knockout")]
#[command(
    about = "List the three-dice combinations whose faces can be combined into every number from 1 to 19"
)]
#[command(version)]
pub struct CliArgs {
    /// Number of faces on each die
    #[arg(long, default_value_t = DEFAULT_FACES)]
    pub faces: u32,

    /// Largest target value; targets run from 1 to this value
    #[arg(long, default_value_t = DEFAULT_TARGET_MAX)]
    pub target_max: u32,

    /// How many times a value may be squared in a row
    #[arg(long, default_value_t = DEFAULT_SQUARE_DEPTH)]
    pub square_depth: usize,

    /// Absolute tolerance when treating a value as an integer
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Binary operators to use, comma separated
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "add,sub,mul,div"
    )]
    pub ops: Vec<OperatorArg>,

    /// Never square a value
    #[arg(long)]
    pub no_square: bool,

    /// Never take a square root
    #[arg(long)]
    pub no_sqrt: bool,

    /// Analyse a single combination instead of searching all of them
    #[arg(long, num_args = 3, value_names = ["A", "B", "C"])]
    pub dice: Option<Vec<u32>>,

    /// Print one expression for every reached target
    #[arg(short = 'x', long)]
    pub show_expressions: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub search: SearchConfig,
    pub dice: Option<Combination>,
    pub show_expressions: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    /// Validate the raw arguments into a runnable configuration
    pub fn into_config(self) -> Result<CliConfig> {
        let search = SearchConfig {
            faces: self.faces,
            target_max: self.target_max,
            square_depth: self.square_depth,
            tolerance: self.tolerance,
            operators: OperatorSet {
                binary: self
                    .ops
                    .iter()
                    .unique()
                    .map(|op| op.to_binary_op())
                    .collect(),
                square: !self.no_square,
                sqrt: !self.no_sqrt,
            },
        };
        search.validate().context("Invalid search parameters")?;

        let dice = self
            .dice
            .as_deref()
            .map(Combination::from_slice)
            .transpose()
            .context("Invalid dice")?;

        Ok(CliConfig {
            search,
            dice,
            show_expressions: self.show_expressions,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logger")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let search = CombinationSearch::new(config.search).context("Failed to set up search")?;
    info!("Search configuration: {:?}", search.config());

    match config.dice {
        Some(combination) => {
            info!("Analysing combination {}", combination);
            let coverage = search
                .analyze(&combination)
                .with_context(|| format!("Cannot analyse {}", combination))?;
            if !coverage.is_winning() {
                warn!("{} misses {} targets", combination, coverage.missing().len());
            }
            println!("{}", coverage.summary());
            if config.show_expressions {
                for line in coverage.witness_lines() {
                    println!("{}", line);
                }
            }
        }
        None => {
            let report = search.run();
            println!("{}", report.render(config.show_expressions));
        }
    }

    Ok(())
}
