//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::output::OutputFormat;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from different
/// sources can be merged; the accessor methods supply the defaults.
///
/// # Examples
///
/// ```
/// use unipath::config::Config;
/// use unipath::OutputFormat;
///
/// let config: Config = serde_yaml::from_str("output_format: json\nignore_case: true\n").unwrap();
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert!(config.ignore_case());
///
/// assert!(serde_yaml::from_str::<Config>("colour: always\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for reports.
    pub output_format: Option<OutputFormat>,

    /// Compare paths case-insensitively by default.
    pub ignore_case: Option<bool>,

    /// Default logging verbosity.
    pub log_level: Option<LogLevel>,
}

impl Config {
    /// The configured output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Whether comparisons ignore case (false by default).
    #[must_use]
    pub fn ignore_case(&self) -> bool {
        self.ignore_case.unwrap_or(false)
    }

    /// The configured log level, or the default.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }
}
