mod platform;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jobfeed_logging::LogDestination;
use log::LevelFilter;

/// Browse a paged job catalog from the terminal.
///
/// Reads commands from stdin: criteria edits (`company`, `location`,
/// `remote`, `tech`, `role`, `salary`, `exp`, `clear`) and scrolling
/// (`scroll`, `bottom`). Type `help` for details.
#[derive(Debug, Parser)]
#[command(name = "jobfeed", version)]
struct Args {
    /// RON configuration file; missing files fall back to defaults.
    #[arg(long, default_value = platform::config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Catalog endpoint, overriding the configuration file.
    #[arg(long)]
    endpoint: Option<String>,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    log: LogTarget,
    /// Most verbose level written to the log.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogTarget {
    Terminal,
    File,
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    jobfeed_logging::initialize(args.log.into(), args.log_level.into(), None);

    let mut config = platform::config::load(&args.config)?;
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
        config.validate()?;
    }

    platform::app::run_app(config)
}
