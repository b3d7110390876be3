//! Command to slice a range of segments out of a path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, parse_path, GlobalOptions};
use clap::Args;

/// Print segments BEGIN (inclusive) to END (exclusive) of PATH.
#[derive(Args)]
pub struct SubPathCommand {
    /// Path to slice
    #[arg(value_name = "PATH")]
    pub path: String,

    /// First segment index
    #[arg(value_name = "BEGIN")]
    pub begin: usize,

    /// One past the last segment index
    #[arg(value_name = "END")]
    pub end: usize,
}

impl SubPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = parse_path(&self.path)?;
        emit(path.sub(self.begin, self.end)?, &config)
    }
}
