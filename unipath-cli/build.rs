//! Build script for unipath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

fn two_paths(name: &'static str, about: &'static str, long_about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .long_about(long_about)
        .arg(Arg::new("base").value_name("BASE").required(true))
        .arg(Arg::new("other").value_name("OTHER").required(true))
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("unipath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and combine platform-independent paths")
        .long_about(
            "Command-line tool for scanning, normalizing and combining hierarchical paths \
             independently of the host platform",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an explicit configuration file")
                .value_name("PATH")
                .global(true)
                .env("UNIPATH_CONFIG"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json", "yaml"])
                .global(true),
        )
        .arg(
            Arg::new("ignore-case")
                .long("ignore-case")
                .help("Compare paths case-insensitively")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Build a path and show its decomposition")
                .long_about("Scan one or more parts into a path and list its segments and file parts")
                .arg(Arg::new("parts").value_name("PATH").num_args(1..).required(true)),
            Command::new("normalize")
                .about("Print the canonical form of a path")
                .long_about("Scan one or more parts into a path and print its canonical text")
                .arg(Arg::new("parts").value_name("PATH").num_args(1..).required(true)),
            two_paths(
                "resolve",
                "Resolve a path against a base",
                "Append OTHER to BASE unless OTHER is absolute; '..' cannot climb above BASE. \
                 A leading '../' in OTHER makes it absolute",
            ),
            two_paths(
                "concat",
                "Append raw text to a base path",
                "Scan OTHER as text appended to BASE, ignoring its leading separator",
            ),
            two_paths(
                "relativize",
                "Compute the relative path between two paths",
                "Print the relative path that leads from BASE to OTHER",
            ),
            Command::new("sub")
                .about("Slice a range of segments out of a path")
                .long_about("Print segments BEGIN (inclusive) to END (exclusive) of PATH")
                .arg(Arg::new("path").value_name("PATH").required(true))
                .arg(Arg::new("begin").value_name("BEGIN").required(true))
                .arg(Arg::new("end").value_name("END").required(true)),
            Command::new("compare")
                .about("Compare two paths")
                .long_about("Show equality, prefix and ancestry relations between two paths")
                .arg(Arg::new("left").value_name("LEFT").required(true))
                .arg(Arg::new("right").value_name("RIGHT").required(true))
                .arg(
                    Arg::new("assert-equal")
                        .long("assert-equal")
                        .help("Exit with status 1 if the paths differ")
                        .action(ArgAction::SetTrue),
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("unipath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
