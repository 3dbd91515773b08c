//! Lab records CLI.

use std::io::{self, IsTerminal};

use clap::Parser;
use labrecords_core::CoreConfig;
use tracing::Level;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, LogFormatArg, LogLevelArg};
use crate::logging::{init_logging, LogConfig, LogFormat};

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&log_config_from_cli(&cli));

    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = CoreConfig::new(cli.database.clone(), cli.password_iterations)?;
    commands::run(&cli.command, &config)
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        use_env_filter: cli.log_level.is_none(),
        with_ansi: io::stderr().is_terminal(),
        ..LogConfig::default()
    };
    if let Some(level) = cli.log_level {
        config.level = match level {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config
}
