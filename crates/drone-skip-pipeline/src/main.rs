mod error;
mod logging;
mod output;
mod settings;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use skip_operations::operations::{SkipDecision, SkipOperation};
use skip_operations::providers::Git2Provider;

use crate::error::{CliError, Result};
use crate::logging::LogLevel;
use crate::output::{OutputFormatter, PlainTextFormatter};
use crate::settings::{Settings, load_drone_env};

/// Drone treats this exit status as "stop the pipeline without failing it".
const SOFT_SKIP_EXIT_CODE: u8 = 78;

/// Written by some Drone runners instead of exporting plugin settings.
const DRONE_ENV_FILE: &str = "/run/drone/env";

#[derive(Parser)]
#[command(name = "drone-skip-pipeline")]
#[command(version = env!("DRONE_SKIP_PIPELINE_VERSION"))]
#[command(about = "Skip pipeline if given files are unchanged", long_about = None)]
pub(crate) struct Cli {
    /// Path to the git repository
    #[arg(long, env = "PLUGIN_GIT_PATH", default_value = ".")]
    pub(crate) git_path: PathBuf,

    /// Files allowed to be skipped, even if changed (regex, comma-separated)
    #[arg(long, env = "PLUGIN_ALLOW_SKIP_CHANGED", value_delimiter = ',')]
    pub(crate) allow_skip_changed: Vec<String>,

    /// Files never allowed to be skipped if changed (regex, comma-separated)
    #[arg(long, env = "PLUGIN_DISALLOW_SKIP_CHANGED", value_delimiter = ',')]
    pub(crate) disallow_skip_changed: Vec<String>,

    /// Commit the pipeline compares against, usually the target branch head
    #[arg(long, env = "DRONE_COMMIT_BEFORE")]
    pub(crate) commit_before: String,

    /// Commit under test
    #[arg(long, env = "DRONE_COMMIT_AFTER")]
    pub(crate) commit_after: String,

    /// Policy file with additional patterns (default: .skip-pipeline.toml in the git path)
    #[arg(long, env = "PLUGIN_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Detect renamed files; renames are then left out of the decision
    #[arg(long, env = "PLUGIN_DETECT_RENAMES")]
    pub(crate) detect_renames: bool,

    /// Log level, unless RUST_LOG is set
    #[arg(long, env = "PLUGIN_LOG_LEVEL", value_enum, ignore_case = true)]
    pub(crate) log_level: Option<LogLevel>,

    /// Enable debug logging (overrides --log-level)
    #[arg(short, long)]
    pub(crate) verbose: bool,

    /// Suppress the changed files report
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

fn main() -> ExitCode {
    if let Err(e) = load_drone_env(Path::new(DRONE_ENV_FILE)) {
        print_error(&e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_level);

    match run(&cli) {
        Ok(SkipDecision::Skip) => ExitCode::from(SOFT_SKIP_EXIT_CODE),
        Ok(SkipDecision::Run) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<SkipDecision> {
    let settings = Settings::resolve(cli)?;

    let operation = SkipOperation::new(Git2Provider::new());
    let outcome = operation.execute(&settings.into_input())?;

    if !cli.quiet {
        print!("{}", PlainTextFormatter.format_outcome(&outcome));
    }

    Ok(outcome.decision)
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
