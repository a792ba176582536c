//! hm CLI Binary
//!
//! Infers principal types for expressions of a minimal Lisp.
//!
//! # Usage
//!
//! ```bash
//! # Infer the type of an inline expression
//! hm infer -e "(lambda (f) (f 5))"
//!
//! # Infer every expression in a file, as JSON lines
//! hm infer prelude.scm --format json
//!
//! # Show the AST the reader produces
//! hm parse -e "(let ([x 1]) x)"
//!
//! # Run the built-in sample corpus
//! hm demo
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use hm_cli::{
    cli::{CliConfig, LogFormat},
    commands::{self, demo::DemoArgs, infer::InferArgs, parse::ParseArgs},
    diagnostics::{render_cli_error, setup_error_reporting},
    CliError, Result,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "hm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hindley-Milner type inference for a minimal Lisp",
    long_about = r#"
Infers the most general type of each expression, with let-polymorphism,
recursive bindings and an occurs check.

EXAMPLES:
    hm infer -e "(lambda (x) x)"          # (a -> a)
    hm infer exprs.scm                    # One line per expression
    hm parse -e "(pair 1 #t)"             # Reader output as JSON
    hm demo                               # Built-in samples
    "#
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the type of each expression
    Infer(InferArgs),

    /// Parse and display the AST as JSON
    Parse(ParseArgs),

    /// Infer the built-in sample expressions
    Demo(DemoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_error_reporting()?;

    let config = match prepare(&cli) {
        Ok(config) => config,
        Err(e) => {
            // No configuration to take logging settings from.
            setup_logging(
                cli.verbose,
                cli.quiet,
                cli.log,
                cli.log_format.unwrap_or_default(),
                None,
            )?;
            report_error(&e, cli.verbose);
            std::process::exit(1);
        }
    };

    setup_logging(
        cli.verbose,
        cli.quiet,
        cli.log,
        cli.log_format.or(config.logging.format).unwrap_or_default(),
        config.logging.level.as_deref(),
    )?;

    let result = match cli.command {
        Commands::Infer(args) => commands::infer_command(args, &config),
        Commands::Parse(args) => commands::parse_command(args, &config),
        Commands::Demo(args) => commands::demo_command(args, &config),
    };

    match result {
        Ok(()) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            report_error(&e, cli.verbose);
            std::process::exit(1);
        }
    }
}

/// Change to the requested directory and load configuration from there.
fn prepare(cli: &Cli) -> Result<CliConfig> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }
    CliConfig::load(cli.config.as_deref())
}

fn report_error(e: &CliError, verbose: u8) {
    if !render_cli_error(e) {
        error!("{}", e);
    }
    if verbose > 0 {
        error!(?e, "detailed error context");
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
    configured: Option<&str>,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match (verbose, configured) {
            (0, Some(directive)) => EnvFilter::new(directive),
            (0, None) => EnvFilter::new("info"),
            (1, _) => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
