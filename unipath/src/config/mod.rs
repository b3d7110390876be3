//! Configuration system for unipath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (a discovered `unipath.yaml` and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`UNIPATH_*`)
//! 3. Explicit configuration file (`--config`)
//! 4. Project config (`unipath.yaml`, nearest ancestor directory)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use unipath::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { ignore_case: Some(true), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! assert!(config.ignore_case());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
