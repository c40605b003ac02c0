use clap::ValueEnum;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Level names accepted by `PLUGIN_LOG_LEVEL`, as other Drone plugins take them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => Level::ERROR,
        }
    }
}

fn default_level(verbose: bool, log_level: Option<LogLevel>) -> Level {
    if verbose {
        return Level::DEBUG;
    }
    log_level.map_or(Level::INFO, Level::from)
}

/// Installs the global subscriber. `RUST_LOG` overrides both flags.
/// Logs go to stderr so the report on stdout stays clean.
pub(crate) fn init(verbose: bool, log_level: Option<LogLevel>) {
    let level = default_level(verbose, log_level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .ok();
}
