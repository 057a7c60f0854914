//! Near-Earth object explorer CLI.

use clap::{ColorChoice, Parser};
use neo_cli::cli::{Cli, Command, LogFormatArg};
use neo_cli::commands::{run_export, run_inspect};
use neo_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    init_logging(&log_config_from_cli(&cli));
    let result = match &cli.command {
        Command::Inspect(args) => run_inspect(&cli, args),
        Command::Export(args) => run_export(&cli, args),
    };
    if let Err(error) = result {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stderr().is_terminal(),
        },
    }
}
