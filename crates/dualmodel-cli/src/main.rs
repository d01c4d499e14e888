mod command;
mod json;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use dualmodel::config::{CONFIG_FILE, Config, LogLevel};
use log::LevelFilter;
use std::path::PathBuf;

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "dualmodel", version, about = "Inspect and exercise the dualmodel registry")]
struct Cli {
    /// Configuration file; defaults apply when it does not exist
    #[arg(long, env = "DUALMODEL_CONFIG", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Override the configured log level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List registered type names in declaration order
    Registry {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-check that every validation type has an earlier persistence type
    Check,

    /// Convert one JSON record between the two representations
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Registered type name, e.g. Note
    #[arg(long = "type")]
    type_name: String,

    #[arg(long, value_enum, default_value = "to-validation")]
    direction: Direction,

    /// Target a projection such as NoteBasic instead of the declared type
    #[arg(long)]
    projection: Option<String>,

    /// Leave defaulted fields to the persistence defaults
    #[arg(long)]
    exclude_unset: bool,

    /// Treat null fields as absent
    #[arg(long)]
    exclude_none: bool,

    /// JSON input file; reads stdin when omitted
    input: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Direction {
    /// Persistence record to validation record
    ToValidation,

    /// Validation record to persistence record
    ToPersistence,

    /// Apply `{"patch": {..}}` onto `{"row": {..}}`
    Patch,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Off => Self::Off,
            CliLogLevel::Error => Self::Error,
            CliLogLevel::Warn => Self::Warn,
            CliLogLevel::Info => Self::Info,
            CliLogLevel::Debug => Self::Debug,
            CliLogLevel::Trace => Self::Trace,
        }
    }
}

fn init_logging(level: LevelFilter) {
    // RUST_LOG still wins over the configured level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("cannot load {}", cli.config.display()))?;
    let level = cli.log_level.map_or(config.log.level, LogLevel::from);
    init_logging(level.filter());

    let registry = dualmodel::register_with(&config).context("model registration failed")?;

    match cli.command {
        Command::Registry { json } => command::registry(registry, json),
        Command::Check => command::check(registry),
        Command::Convert(args) => command::convert(&args),
    }
}
