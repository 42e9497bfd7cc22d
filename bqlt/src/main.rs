//! bqlt - Inspect BabylonDB query sources from the command line.
//!
//! This is the main entry point for the bqlt CLI application. It parses
//! arguments with clap, merges them with `bqlt.toml`, sets up logging, and
//! dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::{lex_options, OutputFormat, TerminatorSetting};
use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::Config;
use error::{BqltError, Result};

/// bqlt - inspect BabylonDB query sources
///
/// Lists the tokens of query files and checks them for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "bqlt")]
#[command(author = "BabylonDB Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect BabylonDB query sources", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "BQLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BQLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "BQLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the bqlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a query file
    ///
    /// Emits one `line kind lexeme` row per token, or a JSON array of
    /// token records with `--format json`.
    Tokens(TokensCommand),

    /// Check query files for lexical errors
    ///
    /// Reports the first lexical error of every file as
    /// `path:line:column: message` and fails if any file has one.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Query file to lex
    file: PathBuf,

    /// Leave whitespace tokens out of the listing
    #[arg(long)]
    skip_trivia: bool,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Line terminator the file is split on (default: from config)
    #[arg(long, value_enum)]
    line_terminator: Option<TerminatorSetting>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Query files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Line terminator the files are split on (default: from config)
    #[arg(long, value_enum)]
    line_terminator: Option<TerminatorSetting>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging, and runs
/// the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, &config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token listings on stdout stay machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
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
        .map_err(|e| BqltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(tokens_args(args, config)),
        Commands::Check(args) => run_check(check_args(args, config)),
    }
}

/// Merges tokens flags over configuration.
fn tokens_args(args: TokensCommand, config: &Config) -> TokensArgs {
    let terminator = args.line_terminator.unwrap_or(config.lexer.line_terminator);
    TokensArgs {
        path: args.file,
        format: args.format.unwrap_or(config.output.format),
        options: lex_options(terminator, args.skip_trivia || config.lexer.skip_trivia),
    }
}

/// Merges check flags over configuration.
fn check_args(args: CheckCommand, config: &Config) -> CheckArgs {
    let terminator = args.line_terminator.unwrap_or(config.lexer.line_terminator);
    CheckArgs {
        paths: args.files,
        options: lex_options(terminator, true),
    }
}
