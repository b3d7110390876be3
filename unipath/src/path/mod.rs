//! Platform-independent hierarchical path values.
//!
//! A [`UniPath`] is an immutable list of segments plus an absolute flag. It
//! is produced by a single-pass scan over raw text which validates every
//! character and resolves `.` and `..` as it goes.
//!
//! # Key Concepts
//!
//! ## Scanning
//!
//! Both `/` and `\` separate segments. Leading and trailing whitespace of a
//! segment is trimmed, interior whitespace is kept. The characters
//! `* ? " < > |` and control characters are rejected. A `:` is accepted only
//! within the first two segments (the drive window), and nothing but a
//! separator may follow it once the window is passed.
//!
//! ## Roots
//!
//! A build starts from a [`Root`]. Segments contributed by the root are
//! protected: `..` in a later component never removes them. This is what
//! makes [`UniPath::resolve`] and [`UniPath::concat`] safe against escapes.
//!
//! # Examples
//!
//! ```
//! use unipath::UniPath;
//!
//! let base = UniPath::parse("/var/www").unwrap();
//! let file = base.concat_str("../../etc/passwd").unwrap();
//! assert_eq!(file.to_string(), "/var/www/etc/passwd");
//!
//! let p = UniPath::parse(" C: \\ Users \\ report.tar.gz ").unwrap();
//! assert_eq!(p.to_string(), "C:/Users/report.tar.gz");
//! assert_eq!(p.file_extension(), "gz");
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use unipath::path::PathRelationship;
//! use unipath::UniPath;
//!
//! let parent = UniPath::parse("/home/user").unwrap();
//! let child = UniPath::parse("/home/user/project").unwrap();
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

mod algebra;
pub mod classify;
mod native;
pub mod relationship;
pub mod scanner;
pub mod segment;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use scanner::Root;
pub use types::UniPath;
