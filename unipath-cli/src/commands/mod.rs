//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `inspect`: Build a path and show its decomposition
//! - `normalize`: Print the canonical form of a path
//! - `resolve`: Resolve a path against a base
//! - `concat`: Append raw text to a base path
//! - `relativize`: Compute the relative path between two paths
//! - `sub`: Slice a range of segments out of a path
//! - `compare`: Compare two paths, optionally asserting equality
//! - `completions`: Generate shell completion scripts

pub mod compare;
pub mod completions;
pub mod concat;
pub mod inspect;
pub mod normalize;
pub mod relativize;
pub mod resolve;
pub mod sub;

pub use compare::CompareCommand;
pub use completions::CompletionsCommand;
pub use concat::ConcatCommand;
pub use inspect::InspectCommand;
pub use normalize::NormalizeCommand;
pub use relativize::RelativizeCommand;
pub use resolve::ResolveCommand;
pub use sub::SubPathCommand;
