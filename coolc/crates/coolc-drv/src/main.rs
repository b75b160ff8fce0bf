//! coolc-lex CLI - Tokenizes a Cool source file.
//!
//! This is the main entry point for the coolc-lex binary. It uses clap for
//! argument parsing, merges flags over the configuration file, and hands
//! off to the driver library.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coolc_drv::config::{Config, OutputFormat};
use coolc_drv::error::DriverError;
use coolc_drv::{run, Input, Options, RunStatus, EXIT_FAILURE};

/// coolc-lex - Lexical analyzer for the Cool language
///
/// Prints one line per token and reports lexical errors on stderr.
#[derive(Parser, Debug)]
#[command(name = "coolc-lex")]
#[command(author = "Cool Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for the Cool language", long_about = None)]
struct Cli {
    /// Source file to scan (default or `-`: standard input)
    file: Option<PathBuf>,

    /// Token output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print a token and error summary to stderr
    #[arg(short, long)]
    stats: bool,

    /// Enable verbose output
    #[arg(short, long, env = "COOLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "COOLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, env = "COOLC_NO_COLOR")]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(status) => ExitCode::from(status.code()),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(EXIT_FAILURE)
        },
    }
}

/// Loads configuration, initializes logging and runs the scan.
fn execute(cli: Cli) -> anyhow::Result<RunStatus> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let color = !cli.no_color && config.color.use_color(std::io::stderr().is_terminal());
    init_logging(cli.verbose || config.verbose, !color)?;

    let options = Options {
        input: Input::from_arg(cli.file),
        format: cli.format.unwrap_or(config.format),
        stats: cli.stats || config.stats,
        color,
    };

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = run(&options, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(status)
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with the token listing.
fn init_logging(verbose: bool, no_color: bool) -> Result<(), DriverError> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config, DriverError> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
