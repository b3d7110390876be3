#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # unipath
//!
//! A platform-independent hierarchical path value type.
//!
//! Paths are scanned from text that may use either `/` or `\` as separator,
//! validated character by character, and stored as an immutable list of
//! segments with `.` and `..` already resolved. No filesystem access is ever
//! performed.
//!
//! ## Core Types
//!
//! - [`UniPath`]: The path value and its algebra
//! - [`Root`]: Where a multi-part build starts from
//! - [`PathRelationship`]: Ancestor / descendant classification
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//!
//! ## Examples
//!
//! ```
//! use unipath::UniPath;
//!
//! let path = UniPath::build("user", [".", "documents", "..", "other", "file.txt"]).unwrap();
//! assert_eq!(path.to_string(), "user/other/file.txt");
//! assert_eq!(path.file_base_name(), Some("file"));
//!
//! let base = UniPath::parse("a/b/c").unwrap();
//! let target = UniPath::parse("a/x/y").unwrap();
//! assert_eq!(base.relativize(&target).to_string(), "../../x/y");
//!
//! assert!(UniPath::parse("user<invalid>").is_err());
//! assert!(UniPath::parse("....").is_err());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, Report, ReportFormatter};
pub use path::{PathRelationship, Root, UniPath};
