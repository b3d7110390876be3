//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, path parsing and report output.

use crate::error::CliError;
use std::path::PathBuf;
use unipath::{Config, ConfigBuilder, OutputFormat, Report, UniPath};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config_file: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Case-insensitive comparison requested on the command line.
    pub ignore_case: bool,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config_file {
        builder = builder.with_config_file(path);
    }

    let flags = Config {
        output_format: global.format,
        ignore_case: global.ignore_case.then_some(true),
        log_level: None,
    };

    builder
        .with_config(flags)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Parse a path argument.
pub fn parse_path(text: &str) -> Result<UniPath, CliError> {
    UniPath::parse(text).map_err(CliError::from)
}

/// Format a report with the configured output format and print it.
pub fn emit(report: impl Into<Report>, config: &Config) -> Result<(), CliError> {
    let formatter = config.output_format().create_formatter();
    let output = formatter.format(&report.into()).map_err(CliError::from)?;
    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_maps_scan_error() {
        let err = parse_path("a<b").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(parse_path("a\\b").unwrap().to_string(), "a/b");
    }

    #[test]
    fn test_missing_config_file_is_config_error() {
        let global = GlobalOptions {
            config_file: Some(PathBuf::from("/nonexistent/unipath/config.yaml")),
            ..Default::default()
        };
        let err = load_configuration(&global).unwrap_err();
        assert_eq!(err.exit_code(), 7);
    }
}
