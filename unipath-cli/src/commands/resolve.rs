//! Command to resolve a path against a base.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, parse_path, GlobalOptions};
use clap::Args;

/// Resolve OTHER against BASE.
///
/// An absolute OTHER is printed unchanged. Otherwise it is appended to BASE,
/// and `..` cannot climb above BASE. OTHER is parsed on its own first, so a
/// leading `../` makes it absolute; use `concat` to keep it under BASE.
#[derive(Args)]
pub struct ResolveCommand {
    /// Base path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Path to resolve
    #[arg(value_name = "OTHER")]
    pub other: String,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = parse_path(&self.base)?;
        emit(base.resolve_str(&self.other)?, &config)
    }
}
