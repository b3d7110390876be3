//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompareCommand, CompletionsCommand, ConcatCommand, InspectCommand, NormalizeCommand,
    RelativizeCommand, ResolveCommand, SubPathCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unipath::OutputFormat;

/// Command-line tool for inspecting and combining platform-independent paths.
#[derive(Parser)]
#[command(name = "unipath")]
#[command(version, about = "Inspect and combine platform-independent paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load an explicit configuration file
    #[arg(long, value_name = "PATH", global = true, env = "UNIPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Compare paths case-insensitively
    #[arg(long, global = true)]
    pub ignore_case: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Build a path and show its decomposition
    Inspect(InspectCommand),

    /// Print the canonical form of a path
    Normalize(NormalizeCommand),

    /// Resolve a path against a base
    Resolve(ResolveCommand),

    /// Append raw text to a base path
    Concat(ConcatCommand),

    /// Compute the relative path between two paths
    Relativize(RelativizeCommand),

    /// Slice a range of segments out of a path
    Sub(SubPathCommand),

    /// Compare two paths
    Compare(CompareCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
