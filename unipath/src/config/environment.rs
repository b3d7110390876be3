//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `UNIPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use crate::output::OutputFormat;
use std::env;

/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "UNIPATH_OUTPUT_FORMAT";

/// Overrides [`Config::ignore_case`].
pub const IGNORE_CASE_ENV: &str = "UNIPATH_IGNORE_CASE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use unipath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format =
                Some(OutputFormat::parse(&val).map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT_ENV.into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var(IGNORE_CASE_ENV) {
            config.ignore_case = Some(Self::parse_bool(IGNORE_CASE_ENV, &val)?);
        }

        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(LogLevel::parse(&val).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }

    /// Parse a boolean value from string.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 3] = [OUTPUT_FORMAT_ENV, IGNORE_CASE_ENV, LOG_MODE_ENV];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_parse_bool() {
        for val in ["true", "1", "YES", "On"] {
            assert!(EnvironmentConfig::parse_bool("X", val).unwrap());
        }
        for val in ["false", "0", "no", " OFF "] {
            assert!(!EnvironmentConfig::parse_bool("X", val).unwrap());
        }
        assert!(EnvironmentConfig::parse_bool("X", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_env_leaves_config_untouched() {
        clear_env();
        let mut config = Config {
            ignore_case: Some(true),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.ignore_case, Some(true));
        assert_eq!(config.output_format, None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "yaml");
        env::set_var(IGNORE_CASE_ENV, "yes");
        env::set_var(LOG_MODE_ENV, "verbose");

        let mut config = Config {
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
        assert_eq!(config.ignore_case, Some(true));
        assert_eq!(config.log_level, Some(LogLevel::Verbose));
    }

    #[test]
    #[serial]
    fn test_invalid_env_value() {
        clear_env();
        env::set_var(IGNORE_CASE_ENV, "sometimes");

        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        clear_env();

        assert!(matches!(err, Error::Validation { ref field, .. } if field == IGNORE_CASE_ENV));
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_ENV, "xml");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(result.is_err());
    }
}
