//! Command to compute the relative path between two paths.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, parse_path, GlobalOptions};
use clap::Args;

/// Print the relative path that leads from BASE to OTHER.
#[derive(Args)]
pub struct RelativizeCommand {
    /// Starting path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Target path
    #[arg(value_name = "OTHER")]
    pub other: String,
}

impl RelativizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let base = parse_path(&self.base)?;
        emit(base.relativize_str(&self.other)?, &config)
    }
}
