use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use commands::{
    convert::{self, ConvertArgs},
    inspect::{self, InspectArgs},
    report::{self, ReportArgs},
};
use quiz_core::config::PipelineConfig;
use quiz_core::errors::QuizError;
use quiz_core::provenance::RunStamp;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

/// Configuration file picked up from the working directory when present.
const DEFAULT_CONFIG: &str = "quizkit.toml";

#[derive(Parser, Debug)]
#[command(
    name = "quizkit",
    about = "Inspect quiz corpora, convert them into difficulty tiers, and report on their variety"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    /// Without a subcommand, the source corpus is inspected and then converted.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(ClapArgs, Debug)]
struct GlobalArgs {
    /// TOML configuration file (defaults to ./quizkit.toml when it exists).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug events unless RUST_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise files, difficulty levels, and themes of the source corpus.
    Inspect(InspectArgs),
    /// Convert the source corpus into one normalized file per difficulty tier.
    Convert(ConvertArgs),
    /// Print theme, competition, temporal, difficulty, and answer statistics.
    Report(ReportArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PipelineConfig, QuizError> {
    match path {
        Some(path) => PipelineConfig::load(path),
        None if Path::new(DEFAULT_CONFIG).is_file() => PipelineConfig::load(Path::new(DEFAULT_CONFIG)),
        None => Ok(PipelineConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);
    let config = load_config(cli.global.config.as_deref())?;
    match cli.command {
        Some(Command::Inspect(args)) => inspect::run(&args, &config),
        Some(Command::Convert(args)) => convert::run(&args, &config, &RunStamp::now()),
        Some(Command::Report(args)) => report::run(&args, &config),
        None => run_default(&config),
    }
}

/// Inspection followed by conversion. A failed inspection does not prevent
/// the conversion attempt; the process still exits non-zero afterwards.
fn run_default(config: &PipelineConfig) -> Result<(), Box<dyn Error>> {
    let stamp = RunStamp::now();
    let inspected = inspect::run(&InspectArgs::default(), config);
    if let Err(err) = &inspected {
        error!(error = %err, "inspection failed");
    }
    println!();
    convert::run(&ConvertArgs::default(), config, &stamp)?;
    inspected
}
