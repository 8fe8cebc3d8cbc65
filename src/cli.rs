use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use countdown_solver::solver::constants::DEFAULT_CACHE_CAPACITY;
use countdown_solver::{ExpressionSolver, Number, SearchConfig, parse_number};
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

/// Countdown - Build a target number from a set of numbers
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Find arithmetic expressions over the given numbers that evaluate to a target value"
)]
#[command(version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Numbers available to the expression
    #[arg(required = true, value_parser = parse_number)]
    pub numbers: Vec<Number>,

    /// Target value to match
    #[arg(short, long, value_parser = parse_number)]
    pub target: Number,

    /// Print every exact hit instead of stopping at the first
    #[arg(short, long)]
    pub all: bool,

    /// Stop after this many exact hits
    #[arg(long, conflicts_with = "all")]
    pub limit: Option<usize>,

    /// Scan every candidate on all cores and print the single best result
    #[arg(short, long, conflicts_with_all = ["all", "limit"])]
    pub parallel: bool,

    /// Skip arrangements that repeat an earlier one by value
    #[arg(short, long)]
    pub distinct: bool,

    /// Subtrees the evaluator remembers
    #[arg(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_size: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// How many results to print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    First,
    Limit(usize),
    All,
    Parallel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<Number>,
    pub target: Number,
    pub mode: OutputMode,
    pub search: SearchConfig,
    pub log_level: LogLevel,
}

impl CliConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        if args.limit == Some(0) {
            bail!("--limit must be at least 1");
        }
        if args.cache_size == 0 {
            bail!("--cache-size must be at least 1");
        }

        let mode = match (args.parallel, args.all, args.limit) {
            (true, _, _) => OutputMode::Parallel,
            (false, true, _) => OutputMode::All,
            (false, false, Some(limit)) => OutputMode::Limit(limit),
            (false, false, None) => OutputMode::First,
        };

        Ok(CliConfig {
            numbers: args.numbers,
            target: args.target,
            mode,
            search: SearchConfig::default()
                .with_cache_capacity(args.cache_size)
                .with_distinct_sequences(args.distinct),
            log_level: args.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    CliConfig::from_args(args).context("Invalid arguments")
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::with_config(config.search.clone());

    if config.mode == OutputMode::Parallel {
        let best = solver
            .closest_parallel(&config.numbers, config.target)
            .context("Search failed")?;
        match best {
            Some(result) => println!("{}", result),
            None => {
                warn!("No candidate could be evaluated");
                println!("Unknown.");
            }
        }
        return Ok(());
    }

    let results = solver
        .search(&config.numbers, config.target)
        .context("Search failed")?;
    let limit = match config.mode {
        OutputMode::First => 1,
        OutputMode::Limit(limit) => limit,
        OutputMode::All | OutputMode::Parallel => usize::MAX,
    };

    let mut printed = 0;
    for result in results.take(limit) {
        if !result.is_exact(config.target) {
            warn!("No exact match found, showing the closest");
        }
        println!("{}", result);
        printed += 1;
    }

    if printed == 0 {
        warn!("No candidate could be evaluated");
        println!("Unknown.");
    }
    info!("Printed {} results", printed);
    Ok(())
}
