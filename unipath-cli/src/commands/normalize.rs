//! Command to print the canonical form of a path.

use crate::error::CliError;
use crate::utils::{emit, load_configuration, GlobalOptions};
use clap::Args;
use unipath::UniPath;

/// Print the canonical form of a path built from one or more parts.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path parts, scanned in order
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub parts: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let (root, rest) = self
            .parts
            .split_first()
            .ok_or_else(|| CliError::InvalidArguments("no path given".to_string()))?;

        emit(UniPath::build(root, rest)?, &config)
    }
}
