use std::path::PathBuf;

use clap::Parser;
use slogger::config::{Config, SinkKind};
use slogger::{cli, logger_from_config, Level};

#[derive(Parser)]
#[command(name = "slogger", about = "Emit one structured JSON log record")]
struct Cli {
    /// Config file to use instead of ~/.config/slogger/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured sink.
    #[arg(long)]
    sink: Option<SinkKind>,

    /// Override the configured file path (implies --sink file).
    #[arg(long)]
    file: Option<PathBuf>,

    /// Leave the `time` key out of the record.
    #[arg(long)]
    no_time: bool,

    /// Log through the error entry point with this error text. Requires the
    /// `error` level.
    #[arg(long, value_name = "TEXT")]
    error: Option<String>,

    /// Write debug logs to /tmp/slogger-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// debug, info, warn or error.
    level: Level,

    message: String,

    /// Key/value pairs, bare values or JSON objects, in any order.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.error.is_some() && cli.level != Level::Error {
        anyhow::bail!("--error requires the error level, got {}", cli.level);
    }

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/slogger-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("slogger debug log started, tail -f /tmp/slogger-debug.log");
    }

    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default config");
            Config::defaults()
        }),
    };
    if let Some(kind) = cli.sink {
        config.sink.kind = kind;
    }
    if let Some(path) = cli.file {
        config.sink.kind = SinkKind::File;
        config.sink.path = path;
    }
    if cli.no_time {
        config.record.timestamps = false;
    }

    let logger = logger_from_config(&config)?;
    let args = cli::parse_arguments(&cli.args);

    match cli.error {
        Some(error) => {
            logger.log_error(&cli.message, error, args);
        }
        None => logger.log_event(cli.level, &cli.message, args),
    }

    Ok(())
}
