//! Main entry point for the unipath CLI.
//!
//! This is the command-line interface for the unipath library. It provides
//! commands for working with platform-independent paths:
//! - `inspect`: Show the decomposition of a path
//! - `normalize`: Print the canonical form of a path
//! - `resolve`, `concat`, `relativize`: Combine two paths
//! - `sub`: Slice a path
//! - `compare`: Compare two paths

use clap::error::ErrorKind;
use clap::Parser;
use unipath::{LogLevel, Logger};
use unipath_cli::cli::{Cli, Command};
use unipath_cli::error::CliError;
use unipath_cli::utils::{load_configuration, GlobalOptions};

fn main() {
    // Parse CLI arguments; usage errors get their own exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprint!("{e}");
            std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
        }
    };

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_file: cli.config,
        format: cli.format,
        ignore_case: cli.ignore_case,
    };

    // Flags win, then the configured level (which already includes UNIPATH_LOG_MODE)
    let logger = if cli.verbose || cli.quiet {
        unipath::init_logger(cli.verbose, cli.quiet)
    } else {
        load_configuration(&global)
            .map_or_else(|_| unipath::init_logger(false, false), |config| {
                Logger::new(config.log_level())
            })
    };
    let quiet = logger.level() == LogLevel::Quiet;
    if let Err(e) = logger.install() {
        eprintln!("WARN: could not install logger: {e}");
    }

    // Execute the command
    let result = match cli.command {
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Concat(cmd) => cmd.execute(&global),
        Command::Relativize(cmd) => cmd.execute(&global),
        Command::Sub(cmd) => cmd.execute(&global),
        Command::Compare(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
